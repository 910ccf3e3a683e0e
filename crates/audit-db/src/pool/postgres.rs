//! PostgreSQL connection pool bootstrap
//!
//! The pool is owned by the host application; repositories only borrow it.

use audit_common::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = options(config).connect(&config.url).await?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

fn options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
}
