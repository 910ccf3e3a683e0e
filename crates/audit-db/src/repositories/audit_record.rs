//! PostgreSQL implementation of AuditRecordRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use audit_core::entities::{AuditRecord, NewAuditRecord};
use audit_core::traits::{AuditRecordRepository, RepoResult};
use audit_core::value_objects::UserId;

use crate::mappers::AuditRecordInsert;
use crate::models::UserAuditModel;

use super::error::{audit_record_not_found, connection_missing, map_db_error, no_audit_records};

/// PostgreSQL implementation of AuditRecordRepository
///
/// The pool is injected and never opened, closed, or resized here.
#[derive(Clone)]
pub struct PgAuditRecordRepository {
    pool: Option<PgPool>,
}

impl PgAuditRecordRepository {
    /// Create a new PgAuditRecordRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a repository whose connection may not have been established
    pub fn with_optional_pool(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    /// Whether a pool was provided
    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    fn pool(&self) -> RepoResult<&PgPool> {
        self.pool.as_ref().ok_or_else(connection_missing)
    }
}

#[async_trait]
impl AuditRecordRepository for PgAuditRecordRepository {
    #[instrument(skip(self, record), fields(user_id = %record.user_id))]
    async fn save(&self, record: &NewAuditRecord) -> RepoResult<AuditRecord> {
        let insert = AuditRecordInsert::new(record);

        let saved = sqlx::query_as::<_, UserAuditModel>(
            r"
            INSERT INTO user_audit (user_id, client_ip, created_on)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, client_ip, created_on
            ",
        )
        .bind(insert.user_id)
        .bind(insert.client_ip)
        .bind(insert.created_on)
        .fetch_one(self.pool()?)
        .await
        .map_err(map_db_error)?;

        Ok(AuditRecord::from(saved))
    }

    #[instrument(skip(self))]
    async fn latest_by_user(&self, user_id: UserId) -> RepoResult<AuditRecord> {
        let result = sqlx::query_as::<_, UserAuditModel>(
            r"
            SELECT id, user_id, client_ip, created_on
            FROM user_audit
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT 1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(self.pool()?)
        .await
        .map_err(map_db_error)?;

        result
            .map(AuditRecord::from)
            .ok_or_else(|| audit_record_not_found(user_id))
    }

    #[instrument(skip(self))]
    async fn latest_overall(&self) -> RepoResult<AuditRecord> {
        let Some(pool) = &self.pool else {
            warn!(reason = "no database connection", "connection to the db lost");
            return Err(no_audit_records());
        };

        // DESC puts NULL timestamps first.
        let result = sqlx::query_as::<_, UserAuditModel>(
            r"
            SELECT id, user_id, client_ip, created_on
            FROM user_audit
            ORDER BY created_on DESC
            LIMIT 1
            ",
        )
        .fetch_optional(pool)
        .await
        .map_err(map_db_error)?;

        result.map(AuditRecord::from).ok_or_else(no_audit_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_core::DomainError;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts WARN events seen while installed
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn disconnected() -> PgAuditRecordRepository {
        PgAuditRecordRepository::with_optional_pool(None)
    }

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAuditRecordRepository>();
    }

    #[test]
    fn test_disconnected_repo_reports_no_connection() {
        assert!(!disconnected().is_connected());
    }

    #[tokio::test]
    async fn test_latest_overall_without_connection_is_not_found() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let err = disconnected().latest_overall().await.unwrap_err();

        assert!(matches!(err, DomainError::NoAuditRecords));
        assert!(err.is_not_found());
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_save_without_connection_is_storage_error() {
        let record = NewAuditRecord::new(
            UserId::new(42),
            "10.0.0.1",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );

        let err = disconnected().save(&record).await.unwrap_err();
        assert!(matches!(err, DomainError::ConnectionUnavailable(_)));
        assert!(err.is_storage());
    }

    #[tokio::test]
    async fn test_latest_by_user_without_connection_is_storage_error() {
        let err = disconnected()
            .latest_by_user(UserId::new(42))
            .await
            .unwrap_err();
        assert!(err.is_storage());
        assert!(!err.is_not_found());
    }
}
