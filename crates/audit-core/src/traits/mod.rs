//! Repository traits (ports)

mod repositories;

pub use repositories::{AuditRecordRepository, RepoResult};
