//! Repository for the `contexts` and `context_translations` tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{ContextRecord, ContextTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for contexts.
pub struct ContextRepo;

impl ContextRepo {
    /// Insert a context. No default flag is written here; defaults go
    /// through [`ContextRepo::set_default`].
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &ContextRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO contexts \
                (id, internal_name, backward_compatibility, is_default, created_at, updated_at) \
             VALUES (?, ?, ?, 0, ?, ?)",
        )
        .bind(id)
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark one context as the default and clear the flag everywhere else.
    pub async fn set_default(pool: &MySqlPool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE contexts SET is_default = (id = ?)")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &ContextTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO context_translations \
                (id, context_id, language_id, name, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.context_id)
        .bind(&record.language_id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
