//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::{ShortenerError, StoreError};
use crate::domain::repositories::MappingRepository;
use crate::utils::token_generator::{RandomTokenGenerator, TokenGenerator};

/// Token used to exercise the storage read path. It contains `-`, which is
/// outside the token alphabet, so it never matches a real mapping.
pub const HEALTH_PROBE_TOKEN: &str = "health-probe";

/// Service for creating and resolving short links.
///
/// Holds no mapping state of its own; every mapping lives in the injected
/// repository, which may be shared across request tasks.
pub struct ShorteningService<R: ?Sized, G = RandomTokenGenerator> {
    repository: Arc<R>,
    generator: G,
}

impl<R: MappingRepository + ?Sized> ShorteningService<R> {
    /// Creates a service that draws tokens from the system random generator.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_generator(repository, RandomTokenGenerator)
    }
}

impl<R: MappingRepository + ?Sized, G: TokenGenerator> ShorteningService<R, G> {
    /// Creates a service with a custom token generator.
    pub fn with_generator(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates (or reuses) a short token for `original_url`.
    ///
    /// # Collision Handling
    ///
    /// A freshly generated token is offered to the repository. If it is
    /// already bound to another URL, a new token is generated and the save
    /// is retried. Retries are unbounded: with 63^10 possible tokens a long
    /// run of collisions is practically impossible.
    ///
    /// # Deduplication
    ///
    /// If `original_url` is already mapped, the repository returns the
    /// existing token and no new mapping is created.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Token`] if the random source fails.
    ///
    /// Returns [`ShortenerError::Store`] on any non-collision repository
    /// failure. These are not retried.
    pub async fn create_short_link(&self, original_url: &str) -> Result<String, ShortenerError> {
        let mut attempt: u64 = 0;

        loop {
            attempt += 1;
            let candidate = self.generator.generate()?;

            match self.repository.save(&candidate, original_url).await {
                Ok(token) => {
                    if token == candidate {
                        metrics::counter!("shortener_links_created_total").increment(1);
                    } else {
                        metrics::counter!("shortener_links_reused_total").increment(1);
                    }
                    debug!(token = %token, attempt, "Short link ready");
                    return Ok(token);
                }
                Err(StoreError::TokenCollision) => {
                    metrics::counter!("shortener_token_collisions_total").increment(1);
                    debug!(attempt, "Token collision, generating a new token");
                }
                Err(e) => {
                    warn!(error = %e, backend = self.repository.backend(), "Failed to save mapping");
                    return Err(ShortenerError::Store(e));
                }
            }
        }
    }

    /// Returns the original URL for a short token.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the token is unknown.
    ///
    /// Returns [`ShortenerError::Store`] on repository failures.
    pub async fn resolve(&self, token: &str) -> Result<String, ShortenerError> {
        self.repository.get(token).await.map_err(|e| match e {
            StoreError::NotFound => {
                metrics::counter!("shortener_resolve_not_found_total").increment(1);
                ShortenerError::NotFound {
                    token: token.to_string(),
                }
            }
            other => ShortenerError::Store(other),
        })
    }

    /// Performs a point lookup against the repository.
    ///
    /// A miss still proves the backend answered. Unlike [`Self::resolve`],
    /// this records no metrics.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Store`] if the repository cannot be queried.
    pub async fn check_storage(&self) -> Result<(), ShortenerError> {
        match self.repository.get(HEALTH_PROBE_TOKEN).await {
            Ok(_) | Err(StoreError::NotFound) => Ok(()),
            Err(e) => Err(ShortenerError::Store(e)),
        }
    }

    /// Name of the storage backend in use.
    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}
