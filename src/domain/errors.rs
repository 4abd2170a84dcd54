//! Typed error kinds for token generation, storage and the shortening service.
//!
//! Failure classification is structural: callers `match` on variants and
//! never inspect error messages.

use thiserror::Error;

/// Failure to produce a candidate token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The operating system entropy source could not be read.
    #[error("random source unavailable: {0}")]
    RandomSource(String),
}

/// Failure reported by a [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The token is already bound to a different original URL.
    ///
    /// Recoverable: the caller should retry with a freshly generated token.
    #[error("token is already bound to a different URL")]
    TokenCollision,

    /// No mapping exists for the requested token.
    #[error("no mapping exists for the requested token")]
    NotFound,

    /// The backend could not complete the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by [`crate::application::services::ShorteningService`].
///
/// Token collisions never appear here; they are consumed by the retry loop.
#[derive(Debug, Error)]
pub enum ShortenerError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("short link '{token}' not found")]
    NotFound { token: String },

    #[error(transparent)]
    Store(StoreError),
}

impl ShortenerError {
    /// Returns true when the error is a domain-level "not found" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
