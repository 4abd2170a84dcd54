//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL is stored as given; only emptiness is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}

/// Response carrying the short token.
#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub short_url: String,
}
