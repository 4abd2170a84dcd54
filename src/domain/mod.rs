//! Domain layer containing the mapping model, error kinds and storage contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Storage backends implement [`repositories::MappingRepository`]
//! and the application layer orchestrates them through
//! [`crate::application::services::ShorteningService`].
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`errors`] - Typed error kinds shared by generator, stores and service
//! - [`repositories`] - Storage trait definitions

pub mod entities;
pub mod errors;
pub mod repositories;
