//! Repository for the `tags` table.

use chrono::{DateTime, Utc};
use inventory_core::record::TagRecord;
use sqlx::MySqlPool;

/// Insert operations for tags.
pub struct TagRepo;

impl TagRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &TagRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tags \
                (id, internal_name, backward_compatibility, category, language_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(&record.category)
        .bind(&record.language_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
