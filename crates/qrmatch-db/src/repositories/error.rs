//! Error handling utilities for repositories

use qrmatch_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a failed match insert, treating the self-match CHECK as a domain rule
pub fn map_match_insert_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_check_violation() && db_err.constraint() == Some("matches_not_self") {
            return DomainError::SelfMatch;
        }
    }
    DomainError::DatabaseError(e.to_string())
}
