//! Repository for the `languages` and `language_translations` tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{LanguageRecord, LanguageTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for language reference data.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Insert a language. The primary key is the ISO 639-3 code carried
    /// by the record; no default flag is written here.
    pub async fn insert(
        pool: &MySqlPool,
        record: &LanguageRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO languages \
                (id, internal_name, iso_code, backward_compatibility, is_default, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.internal_name)
        .bind(&record.iso_code)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark one language as the default and clear the flag everywhere else.
    pub async fn set_default(pool: &MySqlPool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE languages SET is_default = (id = ?)")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &LanguageTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO language_translations \
                (id, language_id, display_language_id, name, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.language_id)
        .bind(&record.display_language_id)
        .bind(&record.name)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
