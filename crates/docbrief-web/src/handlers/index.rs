use axum::Json;

use crate::models::HealthResponse;

/// Health check endpoint.
pub async fn index() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "PDF summarization service is running",
    })
}
