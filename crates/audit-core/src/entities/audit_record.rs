//! Audit record entity - one persisted "user was active" event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// An audit record as stored, with its storage-assigned id
///
/// Records are immutable once written. `created_on` is optional because the
/// column is nullable; records written through [`NewAuditRecord`] always carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: i32,
    pub user_id: UserId,
    /// Originating network address; empty when the caller had none
    pub client_ip: String,
    pub created_on: Option<DateTime<Utc>>,
}

/// An audit record before insertion; storage assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuditRecord {
    pub user_id: UserId,
    pub client_ip: String,
    pub created_on: DateTime<Utc>,
}

impl NewAuditRecord {
    /// Create a record with an explicit timestamp
    pub fn new(user_id: UserId, client_ip: impl Into<String>, created_on: DateTime<Utc>) -> Self {
        Self {
            user_id,
            client_ip: client_ip.into(),
            created_on,
        }
    }

    /// Create a record stamped with the current wall-clock time
    pub fn now(user_id: UserId, client_ip: impl Into<String>) -> Self {
        Self::new(user_id, client_ip, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_keeps_caller_timestamp() {
        let record = NewAuditRecord::new(UserId::new(42), "10.0.0.1", fixed_time());
        assert_eq!(record.user_id, UserId::new(42));
        assert_eq!(record.client_ip, "10.0.0.1");
        assert_eq!(record.created_on, fixed_time());
    }

    #[test]
    fn test_now_uses_current_time() {
        let before = Utc::now();
        let record = NewAuditRecord::now(UserId::new(1), "");
        assert!(record.created_on >= before);
        assert!(record.client_ip.is_empty());
    }
}
