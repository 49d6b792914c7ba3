//! Repository for the `authors` table.

use chrono::{DateTime, Utc};
use inventory_core::record::AuthorRecord;
use sqlx::MySqlPool;

/// Insert operations for authors (catalogue-text credits).
pub struct AuthorRepo;

impl AuthorRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &AuthorRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO authors \
                (id, name, internal_name, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
