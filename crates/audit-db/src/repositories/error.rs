//! Error handling utilities for repositories

use audit_core::error::DomainError;
use audit_core::value_objects::UserId;
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError, keeping the driver message
pub fn map_db_error(e: SqlxError) -> DomainError {
    match &e {
        SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed
        | SqlxError::Io(_)
        | SqlxError::Tls(_) => DomainError::ConnectionUnavailable(e.to_string()),
        SqlxError::Database(db_err) if is_constraint_violation(db_err.kind()) => {
            DomainError::ConstraintViolation(e.to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}

fn is_constraint_violation(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotNullViolation
            | ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::CheckViolation
    )
}

/// Error for an operation attempted without a pool
pub fn connection_missing() -> DomainError {
    DomainError::ConnectionUnavailable("no database connection configured".to_string())
}

/// Create a "no audit record for user" error
pub fn audit_record_not_found(user_id: UserId) -> DomainError {
    DomainError::AuditRecordNotFound(user_id)
}

/// Create a "table is empty" error
pub fn no_audit_records() -> DomainError {
    DomainError::NoAuditRecords
}
