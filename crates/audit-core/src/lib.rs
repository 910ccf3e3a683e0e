//! # audit-core
//!
//! Domain layer for user audit records: the entity, its value objects, the
//! error taxonomy, and the repository trait implemented by the storage layer.
//! This crate has zero dependencies on infrastructure (database, logging setup, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AuditRecord, NewAuditRecord};
pub use error::DomainError;
pub use traits::{AuditRecordRepository, RepoResult};
pub use value_objects::UserId;
