//! HTTP surface for the docbrief summarization relay.
//!
//! Two routes: an unauthenticated health check and the bearer-gated
//! `/upload` endpoint that runs one document through the core pipeline.

pub mod auth;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

use std::sync::Arc;

use state::AppState;

/// Build the application router. CORS is wide open, matching the
/// service's single-page-upload use case.
pub fn router(state: Arc<AppState>) -> axum::Router {
    // Allow uploads up to 50MB
    let body_limit = axum::extract::DefaultBodyLimit::max(50 * 1024 * 1024);

    axum::Router::new()
        .route("/", axum::routing::get(handlers::index::index))
        .route("/upload", axum::routing::post(handlers::upload::upload))
        .layer(body_limit)
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
