//! Repository trait for token/URL mapping storage.

use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Storage contract for short token mappings.
///
/// Implementations keep two uniqueness guarantees: a token is bound to at
/// most one original URL, and an original URL is bound to at most one token.
/// Both must hold under concurrent writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - In-process maps
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping and returns the effective token.
    ///
    /// When `original_url` is already mapped, no new mapping is created and
    /// the existing token is returned instead. The check and the insert are
    /// atomic with respect to concurrent callers saving the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TokenCollision`] if `token` is already bound to a
    /// different URL.
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn save(&self, token: &str, original_url: &str) -> Result<String, StoreError>;

    /// Returns the original URL bound to `token`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists for `token`.
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn get(&self, token: &str) -> Result<String, StoreError>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
