//! Handler for the create endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{CreateUrlRequest, CreateUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short token for an original URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "aZ3_kP09xQ" }
/// ```
///
/// Submitting a URL that is already shortened returns its existing token.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON or an empty URL.
/// Returns 500 Internal Server Error on storage or entropy failures.
pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid request", json!({ "reason": rejection.body_text() }))
    })?;
    payload.validate()?;

    let short_url = state
        .shortening_service
        .create_short_link(&payload.original_url)
        .await?;

    Ok(Json(CreateUrlResponse { short_url }))
}
