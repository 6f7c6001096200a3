use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Uri;
use tracing::debug;

use super::dto::{HealthResponse, ServiceInfo, SummarizeRequest};
use super::{AppState, ApiError, ENDPOINTS, SERVICE_NAME};
use crate::stats::{self, Summary};

/// GET / - service name, version and available endpoints.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
        version: state.version,
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version,
    })
}

/// POST /calc/summarize - count, mean, min and max of `values`.
///
/// Body rejections (bad JSON, wrong content type, wrong element types) and
/// empty input both come back as 422.
#[tracing::instrument(skip_all)]
pub async fn summarize(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<Summary>, ApiError> {
    let Json(request) = payload?;
    debug!(values = request.values.len(), "Summarizing values");

    let summary = stats::summarize(&request.values)?;
    debug!(mean = summary.mean, min = summary.min, max = summary.max, "Summary computed");

    Ok(Json(summary))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
