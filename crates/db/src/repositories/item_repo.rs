//! Repository for the `items` table, its translations, and the item
//! pivot tables.

use chrono::{DateTime, Utc};
use inventory_core::record::{ItemRecord, ItemTranslationRecord};
use sqlx::MySqlPool;

/// Insert operations for items (objects, monuments, details, pictures).
pub struct ItemRepo;

impl ItemRepo {
    pub async fn insert(
        pool: &MySqlPool,
        id: &str,
        record: &ItemRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO items \
                (id, partner_id, collection_id, parent_id, internal_name, type, country_id, \
                 project_id, owner_reference, mwnf_reference, latitude, longitude, \
                 backward_compatibility, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.partner_id)
        .bind(&record.collection_id)
        .bind(&record.parent_id)
        .bind(&record.internal_name)
        .bind(record.kind.as_str())
        .bind(&record.country_id)
        .bind(&record.project_id)
        .bind(&record.owner_reference)
        .bind(&record.mwnf_reference)
        .bind(record.latitude)
        .bind(record.longitude)
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
        record: &ItemTranslationRecord,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO item_translations \
                (id, item_id, language_id, context_id, backward_compatibility, name, \
                 description, alternate_name, type, holder, owner, initial_owner, dates, \
                 location, dimensions, place_of_production, bibliography, author_id, \
                 extra, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&record.item_id)
        .bind(&record.language_id)
        .bind(&record.context_id)
        .bind(&record.backward_compatibility)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.alternate_name)
        .bind(&record.kind)
        .bind(&record.holder)
        .bind(&record.owner)
        .bind(&record.initial_owner)
        .bind(&record.dates)
        .bind(&record.location)
        .bind(&record.dimensions)
        .bind(&record.place_of_production)
        .bind(&record.bibliography)
        .bind(&record.author_id)
        .bind(&record.extra)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Attach a tag to an item. Duplicate pairs are ignored.
    pub async fn attach_tag(
        pool: &MySqlPool,
        item_id: &str,
        tag_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT IGNORE INTO item_tag (item_id, tag_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(item_id)
        .bind(tag_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Attach an artist to an item. Duplicate pairs are ignored.
    pub async fn attach_artist(
        pool: &MySqlPool,
        item_id: &str,
        artist_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT IGNORE INTO artist_item (item_id, artist_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(item_id)
        .bind(artist_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }
}
