//! Audit record entity <-> model mapper

use chrono::{DateTime, Utc};

use audit_core::entities::{AuditRecord, NewAuditRecord};
use audit_core::value_objects::UserId;

use crate::models::UserAuditModel;

/// Convert UserAuditModel to AuditRecord entity
impl From<UserAuditModel> for AuditRecord {
    fn from(model: UserAuditModel) -> Self {
        AuditRecord {
            id: model.id,
            user_id: UserId::new(model.user_id),
            client_ip: model.client_ip.unwrap_or_default(),
            created_on: model.created_on,
        }
    }
}

/// Values bound for an insert into user_audit
///
/// Unset values (zero user id, empty address) are written as NULL, so a
/// record without a user is rejected by the NOT NULL constraint.
pub struct AuditRecordInsert<'a> {
    pub user_id: Option<i32>,
    pub client_ip: Option<&'a str>,
    pub created_on: DateTime<Utc>,
}

impl<'a> AuditRecordInsert<'a> {
    pub fn new(record: &'a NewAuditRecord) -> Self {
        Self {
            user_id: (!record.user_id.is_zero()).then_some(record.user_id.into_inner()),
            client_ip: Some(record.client_ip.as_str()).filter(|ip| !ip.is_empty()),
            created_on: record.created_on,
        }
    }
}
