//! PostgreSQL connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;
use std::time::Duration;

pub type DbPool = sqlx::PgPool;

const SCHEMA: &str = include_str!("../../migrations/0001_identities.sql");

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create the `identities` table and its unique email index if missing.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA).await?;
    Ok(())
}
