//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /calc/summarize`.
///
/// Elements must be JSON numbers; strings, booleans and `null` are rejected
/// during deserialization.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub values: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
