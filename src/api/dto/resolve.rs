//! DTOs for the resolve endpoint.

use serde::Serialize;

/// Response carrying the original URL for a token.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub original_url: String,
}
