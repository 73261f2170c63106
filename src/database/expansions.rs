//! [`ExpansionStore`] implementation over the shared SQLite pool

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::{Database, ExpansionStore};
use crate::errors::StoreError;
use crate::models::ExpansionRow;

#[async_trait]
impl ExpansionStore for Database {
    async fn get_expansion(&self, studio_key: &str) -> Result<Option<ExpansionRow>, StoreError> {
        let row = sqlx::query(
            "SELECT studio_key, display_names, slugs, cached_at
             FROM studio_expansions
             WHERE studio_key = ?",
        )
        .bind(studio_key)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let studio_key: String = row.try_get("studio_key")?;
        let names_json: String = row.try_get("display_names")?;
        let slugs: String = row.try_get("slugs")?;
        let cached_at_ms: i64 = row.try_get("cached_at")?;

        let display_names: Vec<String> = serde_json::from_str(&names_json)?;
        let cached_at = DateTime::<Utc>::from_timestamp_millis(cached_at_ms).ok_or_else(|| {
            StoreError::CorruptRow {
                key: studio_key.clone(),
                reason: format!("cached_at {cached_at_ms} is out of range"),
            }
        })?;

        Ok(Some(ExpansionRow {
            studio_key,
            display_names,
            slugs,
            cached_at,
        }))
    }

    async fn upsert_expansion(&self, row: &ExpansionRow) -> Result<(), StoreError> {
        let names_json = serde_json::to_string(&row.display_names)?;

        sqlx::query(
            r#"
            INSERT INTO studio_expansions (studio_key, display_names, slugs, cached_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (studio_key) DO UPDATE SET
                display_names = excluded.display_names,
                slugs = excluded.slugs,
                cached_at = excluded.cached_at
            "#,
        )
        .bind(&row.studio_key)
        .bind(&names_json)
        .bind(&row.slugs)
        .bind(row.cached_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM studio_expansions WHERE cached_at < ?")
            .bind(cutoff.timestamp_millis())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
