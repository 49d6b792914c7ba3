//! Repository for the `countries` and `country_translations` tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{CountryRecord, CountryTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for country reference data.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a country. The primary key is the ISO 3166-1 alpha-3 code.
    pub async fn insert(
        pool: &MySqlPool,
        record: &CountryRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO countries \
                (id, internal_name, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &CountryTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO country_translations \
                (id, country_id, language_id, name, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.country_id)
        .bind(&record.language_id)
        .bind(&record.name)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
