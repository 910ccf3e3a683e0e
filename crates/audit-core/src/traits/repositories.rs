//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{AuditRecord, NewAuditRecord};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Audit Record Repository
// ============================================================================

#[async_trait]
pub trait AuditRecordRepository: Send + Sync {
    /// Insert a record and return it with the storage-assigned id
    async fn save(&self, record: &NewAuditRecord) -> RepoResult<AuditRecord>;

    /// Most recently inserted record (highest id) for a user
    ///
    /// Returns [`DomainError::AuditRecordNotFound`] when the user has no records.
    async fn latest_by_user(&self, user_id: UserId) -> RepoResult<AuditRecord>;

    /// Record with the latest `created_on` across all users
    ///
    /// Returns [`DomainError::NoAuditRecords`] when the table is empty.
    async fn latest_overall(&self) -> RepoResult<AuditRecord>;
}
