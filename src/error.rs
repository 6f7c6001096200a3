use thiserror::Error;

/// Errors raised by the calculations in [`crate::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The caller supplied input the calculation cannot accept.
    #[error("{0}")]
    InvalidInput(String),
}

impl StatsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidInput(message.into())
    }
}
