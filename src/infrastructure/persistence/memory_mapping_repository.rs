//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::errors::StoreError;
use crate::domain::repositories::MappingRepository;

#[derive(Debug, Default)]
struct Indexes {
    by_token: HashMap<String, String>,
    by_url: HashMap<String, String>,
}

/// Mapping storage held in process memory.
///
/// Two hash maps (token → URL and URL → token) live behind a single
/// read/write lock. Lookups share the read lock; `save` holds the write lock
/// for the whole check-then-insert so both indexes change together.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryMappingRepository {
    indexes: RwLock<Indexes>,
}

impl MemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored mappings.
    pub async fn len(&self) -> usize {
        self.indexes.read().await.by_token.len()
    }

    /// Returns true if no mappings are stored.
    pub async fn is_empty(&self) -> bool {
        self.indexes.read().await.by_token.is_empty()
    }

    /// Returns a snapshot of all mappings, ordered by token.
    pub async fn mappings(&self) -> Vec<Mapping> {
        let indexes = self.indexes.read().await;
        let mut mappings: Vec<Mapping> = indexes
            .by_token
            .iter()
            .map(|(token, url)| Mapping::new(token.as_str(), url.as_str()))
            .collect();
        mappings.sort_by(|a, b| a.token.cmp(&b.token));
        mappings
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn save(&self, token: &str, original_url: &str) -> Result<String, StoreError> {
        let mut indexes = self.indexes.write().await;

        if let Some(existing) = indexes.by_url.get(original_url) {
            debug!(token = %existing, "URL already mapped, reusing token");
            return Ok(existing.clone());
        }

        if indexes.by_token.contains_key(token) {
            return Err(StoreError::TokenCollision);
        }

        indexes
            .by_token
            .insert(token.to_string(), original_url.to_string());
        indexes
            .by_url
            .insert(original_url.to_string(), token.to_string());

        Ok(token.to_string())
    }

    async fn get(&self, token: &str) -> Result<String, StoreError> {
        self.indexes
            .read()
            .await
            .by_token
            .get(token)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
