//! Health endpoint

use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::AppState;

/// GET /health
/// Reports the recognizer in use and the upload limits
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        recognizer: state.recognizer.name().to_string(),
        max_upload_bytes: state.config.max_upload_bytes,
        supported_content_types: state.recognizer.content_types(),
    })
}
