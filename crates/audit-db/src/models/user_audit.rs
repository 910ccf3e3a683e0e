//! User audit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_audit table
#[derive(Debug, Clone, FromRow)]
pub struct UserAuditModel {
    pub id: i32,
    pub user_id: i32,
    pub client_ip: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}
