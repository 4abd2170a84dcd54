//! HTTP API layer.
//!
//! Translates HTTP requests into calls on
//! [`crate::application::services::ShorteningService`] and maps its errors to
//! status codes.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
