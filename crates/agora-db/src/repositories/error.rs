//! Error handling utilities for repositories

use agora_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Whether the error is a unique-constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

/// Whether the error is a foreign-key violation
pub fn is_foreign_key_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_foreign_key_violation)
}

/// Name of the violated constraint, if the backend reports one
pub fn violated_constraint(e: &SqlxError) -> Option<&str> {
    e.as_database_error().and_then(|db_err| db_err.constraint())
}
