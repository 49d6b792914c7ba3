//! Repository for the `artists` table.

use chrono::{DateTime, Utc};
use inventory_core::record::ArtistRecord;
use sqlx::MySqlPool;

/// Insert operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &ArtistRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO artists \
                (id, name, internal_name, place_of_birth, place_of_death, date_of_birth, \
                 date_of_death, period_of_activity, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.internal_name)
        .bind(&record.place_of_birth)
        .bind(&record.place_of_death)
        .bind(&record.date_of_birth)
        .bind(&record.date_of_death)
        .bind(&record.period_of_activity)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
