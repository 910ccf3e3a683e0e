//! Domain entities - core business objects

mod audit_record;

pub use audit_record::{AuditRecord, NewAuditRecord};
