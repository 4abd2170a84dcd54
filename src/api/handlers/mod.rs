//! HTTP request handlers for API endpoints.

pub mod health;
pub mod resolve;
pub mod shorten;

pub use health::health_handler;
pub use resolve::resolve_handler;
pub use shorten::create_url_handler;
