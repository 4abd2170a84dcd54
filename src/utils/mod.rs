//! Utility functions for token generation and database error handling.
//!
//! - [`token_generator`] - Random short token generation
//! - [`db_error`] - PostgreSQL constraint violation classification

pub mod db_error;
pub mod token_generator;
