//! Summary statistics over caller-supplied numbers.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Count, mean and extremes of a non-empty list of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarizes `values` into a [`Summary`].
///
/// Values are summed in ascending order so the result does not depend on
/// the order they were supplied in. The mean is kept within `[min, max]`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] if `values` is empty or contains a
/// NaN or infinite value.
pub fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::invalid("Cannot summarize an empty list"));
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::invalid(format!(
            "Item at index {index} must be a finite number"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    Ok(Summary {
        count: sorted.len(),
        mean: mean(&sorted).clamp(min, max),
        min,
        max,
    })
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
///
/// Falls back to summing `v / n` when the plain sum overflows.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Expresses `part` as a percentage of `total`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] when `total` is zero.
pub fn calculate_percentage(part: f64, total: f64) -> Result<f64, StatsError> {
    if total == 0.0 {
        return Err(StatsError::invalid(
            "Cannot calculate percentage with zero total",
        ));
    }
    Ok((part / total) * 100.0)
}
