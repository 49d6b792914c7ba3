//! Repository for the `partners` and `partner_translations` tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{PartnerRecord, PartnerTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for partners (museums and institutions).
pub struct PartnerRepo;

impl PartnerRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &PartnerRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO partners \
                (id, type, internal_name, backward_compatibility, country_id, \
                 latitude, longitude, project_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(record.kind.as_str())
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(&record.country_id)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.project_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &PartnerTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO partner_translations \
                (id, partner_id, language_id, context_id, backward_compatibility, name, \
                 description, city_display, address, contact_website, contact_phone, \
                 contact_email_general, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.partner_id)
        .bind(&record.language_id)
        .bind(&record.context_id)
        .bind(&record.backward_compatibility)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.city_display)
        .bind(&record.address)
        .bind(&record.contact_website)
        .bind(&record.contact_phone)
        .bind(&record.contact_email)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
