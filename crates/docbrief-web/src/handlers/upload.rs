use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::auth;
use crate::models::{ApiError, ErrorResponse, UploadResponse};
use crate::state::AppState;
use crate::upload;

/// Upload a PDF for summarization.
///
/// The bearer gate runs first, then multipart parsing; everything after
/// that is the core pipeline, whose error taxonomy is mapped to statuses
/// by [`ApiError`].
pub async fn upload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    if let Err(rejection) = auth::verify_token(&headers, &state.auth_token) {
        return rejection;
    }

    let file = match upload::parse_multipart(multipart).await {
        Ok(file) => file,
        Err(detail) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response();
        }
    };

    match state.pipeline.run(&file.filename, &file.data).await {
        Ok(()) => (
            StatusCode::OK,
            Json(UploadResponse {
                message: "PDF processed and summary forwarded successfully",
                filename: file.filename,
                status: "success",
            }),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
