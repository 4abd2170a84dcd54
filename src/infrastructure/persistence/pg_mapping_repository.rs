//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::errors::StoreError;
use crate::domain::repositories::MappingRepository;
use crate::utils::db_error::{UniqueViolation, store_error, unique_violation};

/// PostgreSQL repository backed by the `urls` table.
///
/// `short_url` is the primary key and `original_url` is unique through an
/// index on its MD5 digest, so both uniqueness rules are enforced by the
/// database even across multiple service instances. The digest keeps the
/// index entry small for URLs of any length.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Looks up the mapping for an original URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    pub async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, StoreError> {
        let token = sqlx::query_scalar::<_, String>(
            "SELECT short_url FROM urls WHERE md5(original_url) = md5($1) AND original_url = $1",
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(store_error)?;

        Ok(token.map(|token| Mapping::new(token, original_url)))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE short_url = $1")
            .bind(token)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn save(&self, token: &str, original_url: &str) -> Result<String, StoreError> {
        let result = sqlx::query("INSERT INTO urls (short_url, original_url) VALUES ($1, $2)")
            .bind(token)
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await;

        let err = match result {
            Ok(_) => return Ok(token.to_string()),
            Err(err) => err,
        };

        match unique_violation(&err) {
            Some(UniqueViolation::OriginalUrl) => {
                let existing = self.find_by_original_url(original_url).await?;
                match existing {
                    Some(mapping) => {
                        debug!(token = %mapping.token, "URL already mapped, reusing token");
                        Ok(mapping.token)
                    }
                    None => Err(StoreError::Unavailable(
                        "original URL conflict reported but no mapping found".to_string(),
                    )),
                }
            }
            Some(UniqueViolation::Token) => {
                // The exact pair may already exist; that is a successful save.
                match self.find_by_token(token).await? {
                    Some(bound) if bound == original_url => Ok(token.to_string()),
                    _ => Err(StoreError::TokenCollision),
                }
            }
            None => Err(store_error(err)),
        }
    }

    async fn get(&self, token: &str) -> Result<String, StoreError> {
        self.find_by_token(token).await?.ok_or(StoreError::NotFound)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
