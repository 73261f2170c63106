//! SQLite persistence for studio expansions
//!
//! The durable tier of the cache. [`Database`] owns the connection pool and
//! applies migrations; the [`ExpansionStore`] trait is the seam the cache
//! orchestrator is generic over, so tests can substitute their own store.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Pool, Sqlite, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::StoreError;
use crate::models::ExpansionRow;

pub mod expansions;

/// Async boundary between the cache orchestrator and durable storage.
///
/// Implementations hold no business logic. The orchestrator treats read
/// errors as tier misses and write errors as logged, swallowed failures.
#[async_trait]
pub trait ExpansionStore: Send + Sync {
    /// Point lookup by exact normalized key.
    async fn get_expansion(&self, studio_key: &str) -> Result<Option<ExpansionRow>, StoreError>;

    /// Insert or fully replace the row for `row.studio_key`.
    async fn upsert_expansion(&self, row: &ExpansionRow) -> Result<(), StoreError>;

    /// Delete rows cached before `cutoff`; returns how many were removed.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError>;
}

/// Versioned migrations, applied in order and recorded in
/// `schema_migrations` so reruns are no-ops.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_studio_expansions",
    r#"
    CREATE TABLE IF NOT EXISTS studio_expansions (
        studio_key TEXT PRIMARY KEY,
        display_names TEXT NOT NULL,
        slugs TEXT NOT NULL,
        cached_at BIGINT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_studio_expansions_cached_at
        ON studio_expansions (cached_at);
    "#,
)];

/// SQLite-backed expansion store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn pool(&self) -> Pool<Sqlite> {
        self.pool.clone()
    }

    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // Create database if it doesn't exist (for SQLite)
        if !Sqlite::database_exists(&config.url).await? {
            Sqlite::create_database(&config.url).await?;
        }

        let pool = match config.max_connections {
            Some(max) => {
                SqlitePoolOptions::new()
                    .max_connections(max)
                    .connect(&config.url)
                    .await?
            }
            None => SqlitePool::connect(&config.url).await?,
        };

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                success BOOLEAN NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for (name, sql) in MIGRATIONS {
            // Extract version from the name (e.g., "001_studio_expansions" -> 1)
            let version: i64 = name
                .split('_')
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);

            let applied = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM schema_migrations WHERE version = ? AND success = true",
            )
            .bind(version)
            .fetch_one(&self.pool)
            .await?;

            if applied > 0 {
                continue;
            }

            let start = std::time::Instant::now();
            let mut transaction = self.pool.begin().await?;

            match sqlx::query(sql).execute(&mut *transaction).await {
                Ok(_) => {
                    sqlx::query(
                        "INSERT INTO schema_migrations (version, description, success)
                         VALUES (?, ?, true)",
                    )
                    .bind(version)
                    .bind(name)
                    .execute(&mut *transaction)
                    .await?;

                    transaction.commit().await?;
                    info!(
                        "Applied migration: {} ({}ms)",
                        name,
                        start.elapsed().as_millis()
                    );
                }
                Err(e) => {
                    transaction.rollback().await?;
                    return Err(anyhow::anyhow!("Migration {} failed: {}", name, e));
                }
            }
        }

        Ok(())
    }
}
