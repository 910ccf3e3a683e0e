//! Database models - SQLx-compatible structs for PostgreSQL tables

mod user_audit;

pub use user_audit::UserAuditModel;
