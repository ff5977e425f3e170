use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::models::ErrorResponse;

/// Compare the request's bearer token against the configured secret.
/// Evaluated before any pipeline stage runs; a missing header, a
/// non-bearer scheme, or a mismatched token all terminate the request
/// with 403.
pub fn verify_token(headers: &HeaderMap, expected: &str) -> Result<(), Response> {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected => Ok(()),
        _ => Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                detail: "Invalid authentication token".to_string(),
            }),
        )
            .into_response()),
    }
}
