//! Mapping repository implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::MappingRepository`].
//!
//! # Repositories
//!
//! - [`MemoryMappingRepository`] - Process-local maps behind a read/write lock
//! - [`PgMappingRepository`] - PostgreSQL `urls` table via SQLx

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
