//! Repository for the `item_item_links` table and its translations.

use chrono::{DateTime, Utc};
use inventory_core::record::{ItemItemLinkRecord, ItemItemLinkTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for item-to-item links.
pub struct ItemLinkRepo;

impl ItemLinkRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &ItemItemLinkRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO item_item_links \
                (id, source_id, target_id, context_id, backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.source_id)
        .bind(&record.target_id)
        .bind(&record.context_id)
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
        record: &ItemItemLinkTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO item_item_link_translations \
                (id, item_item_link_id, language_id, description, reciprocal_description, \
                 backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.item_item_link_id)
        .bind(&record.language_id)
        .bind(&record.description)
        .bind(&record.reciprocal_description)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
