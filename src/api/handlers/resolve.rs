//! Handler for the resolve endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL for a short token.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the token is unknown.
/// Returns 500 Internal Server Error on storage failures.
pub async fn resolve_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let original_url = state.shortening_service.resolve(&short_url).await?;

    Ok(Json(ResolveResponse { original_url }))
}
