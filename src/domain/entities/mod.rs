//! Core domain entities.
//!
//! - [`Mapping`] - A persisted `(token, original_url)` pair

pub mod mapping;

pub use mapping::Mapping;
