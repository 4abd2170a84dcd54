//! Classification of PostgreSQL insert failures on the `urls` table.

use crate::domain::errors::StoreError;

/// Primary key constraint on `urls.short_url`.
pub const TOKEN_CONSTRAINT: &str = "urls_pkey";

/// Unique index on `md5(urls.original_url)`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "urls_original_url_key";

/// SQLSTATE for a relation that does not exist.
const UNDEFINED_TABLE: &str = "42P01";

/// Which uniqueness rule an insert into `urls` violated, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    Token,
    OriginalUrl,
}

/// Inspects the database error's SQLSTATE and constraint name.
///
/// Returns `None` for anything that is not a unique violation on one of the
/// two known constraints.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(TOKEN_CONSTRAINT) => Some(UniqueViolation::Token),
        Some(ORIGINAL_URL_CONSTRAINT) => Some(UniqueViolation::OriginalUrl),
        _ => None,
    }
}

/// Returns `true` when the query referenced a table that does not exist,
/// typically because migrations have not been applied yet.
pub fn is_undefined_table(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == UNDEFINED_TABLE)
}

/// Converts an unclassified SQLx error into [`StoreError::Unavailable`].
pub fn store_error(e: sqlx::Error) -> StoreError {
    tracing::error!(error = %e, "Database error");
    StoreError::Unavailable(e.to_string())
}
