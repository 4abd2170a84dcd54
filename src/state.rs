//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShorteningService;
use crate::domain::repositories::MappingRepository;

/// Service used by handlers, with the storage backend chosen at startup.
pub type SharedShorteningService = Arc<ShorteningService<dyn MappingRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub shortening_service: SharedShorteningService,
}

impl AppState {
    /// Builds state around an already constructed repository.
    pub fn new(repository: Arc<dyn MappingRepository>) -> Self {
        Self {
            shortening_service: Arc::new(ShorteningService::new(repository)),
        }
    }
}
