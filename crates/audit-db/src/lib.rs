//! # audit-db
//!
//! Database layer implementing the audit record repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Database model with SQLx `FromRow` derive for the `user_audit` table
//! - Entity ↔ Model mapper
//! - `PgAuditRecordRepository`, the store itself
//! - A pool builder for host applications; the repository only receives the pool
//!
//! ## Usage
//!
//! ```rust,ignore
//! use audit_common::AppConfig;
//! use audit_core::{AuditRecordRepository, NewAuditRecord, UserId};
//! use audit_db::{create_pool, PgAuditRecordRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let repo = PgAuditRecordRepository::new(pool);
//!
//!     let saved = repo.save(&NewAuditRecord::now(UserId::new(42), "10.0.0.1")).await?;
//!     let latest = repo.latest_by_user(saved.user_id).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool};
pub use repositories::PgAuditRecordRepository;
