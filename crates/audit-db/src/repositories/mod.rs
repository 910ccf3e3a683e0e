//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in audit-core.

mod audit_record;
mod error;

pub use audit_record::PgAuditRecordRepository;
