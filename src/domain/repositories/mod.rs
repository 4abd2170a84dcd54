//! Repository trait definitions for the domain layer.
//!
//! These traits abstract persistence behind a contract that every storage
//! backend satisfies identically.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Bidirectional token/URL storage

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
