//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("No audit record found for user: {0}")]
    AuditRecordNotFound(UserId),

    #[error("No audit records found")]
    NoAuditRecords,

    // =========================================================================
    // Storage Errors (wrapped driver messages)
    // =========================================================================
    #[error("Database connection unavailable: {0}")]
    ConnectionUnavailable(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a "no rows" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AuditRecordNotFound(_) | Self::NoAuditRecords)
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::ConnectionUnavailable(_) | Self::ConstraintViolation(_) | Self::DatabaseError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_and_storage_are_disjoint() {
        let not_found = [
            DomainError::AuditRecordNotFound(UserId::new(5)),
            DomainError::NoAuditRecords,
        ];
        for err in &not_found {
            assert!(err.is_not_found());
            assert!(!err.is_storage());
        }

        let storage = [
            DomainError::ConnectionUnavailable("pool timed out".to_string()),
            DomainError::ConstraintViolation("not null".to_string()),
            DomainError::DatabaseError("syntax error".to_string()),
        ];
        for err in &storage {
            assert!(err.is_storage());
            assert!(!err.is_not_found());
        }
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::AuditRecordNotFound(UserId::new(42));
        assert_eq!(err.to_string(), "No audit record found for user: 42");

        let err = DomainError::DatabaseError("relation \"user_audit\" does not exist".to_string());
        assert_eq!(
            err.to_string(),
            "Database error: relation \"user_audit\" does not exist"
        );
    }
}
