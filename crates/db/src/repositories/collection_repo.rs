//! Repository for the `collections` table, its translations, and the
//! collection pivot tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{CollectionRecord, CollectionTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for collections.
pub struct CollectionRepo;

impl CollectionRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &CollectionRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO collections \
                (id, context_id, language_id, parent_id, type, internal_name, \
                 backward_compatibility, latitude, longitude, country_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.context_id)
        .bind(&record.language_id)
        .bind(&record.parent_id)
        .bind(record.kind.as_deref().unwrap_or("collection"))
        .bind(&record.internal_name)
        .bind(&record.backward_compatibility)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.country_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn insert_translation(
        pool: &MySqlPool,
        id: &str,
        record: &CollectionTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO collection_translations \
                (id, collection_id, language_id, context_id, title, description, \
                 backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.collection_id)
        .bind(&record.language_id)
        .bind(&record.context_id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.backward_compatibility)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Attach an item to a collection. Duplicate pairs are ignored; the
    /// pivot has no payload beyond timestamps.
    pub async fn attach_item(
        pool: &MySqlPool,
        collection_id: &str,
        item_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT IGNORE INTO collection_item (collection_id, item_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(collection_id)
        .bind(item_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Attach a partner to a collection with a collection-type qualifier.
    pub async fn attach_partner(
        pool: &MySqlPool,
        collection_id: &str,
        partner_id: &str,
        collection_type: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT IGNORE INTO collection_partner \
                (collection_id, collection_type, partner_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(collection_id)
        .bind(collection_type)
        .bind(partner_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
