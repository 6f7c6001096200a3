//! HTTP transport for the calculation service.
//!
//! Routes:
//! - `GET /` service information
//! - `GET /health` liveness and version
//! - `POST /calc/summarize` summary statistics for a list of numbers

pub mod dto;
pub mod error;
pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

pub const SERVICE_NAME: &str = "Calculation Service API";
pub const ENDPOINTS: &[&str] = &["/health", "/calc/summarize"];

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: String,
}

impl AppState {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/calc/summarize", post(handlers::summarize))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
