//! API route configuration.

use crate::api::handlers::{create_url_handler, health_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes for creating and resolving short links.
///
/// # Endpoints
///
/// - `GET  /health`       - Storage health check
/// - `POST /`             - Create a short link
/// - `GET  /{short_url}`  - Resolve a short link to its original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", post(create_url_handler))
        .route("/{short_url}", get(resolve_handler))
}
