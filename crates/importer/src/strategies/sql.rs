//! SQL write strategy: direct inserts into the target MySQL schema.
//!
//! This is the fast path for bulk imports. Identifiers are minted here
//! (UUID v4, except reference data whose ISO code is the key) and a
//! single per-run timestamp is used for all created/updated columns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use inventory_core::error::ImportError;
use inventory_core::record::{
    ArtistRecord, AuthorRecord, CollectionRecord, CollectionTranslationRecord, ContextRecord,
    ContextTranslationRecord, CountryRecord, CountryTranslationRecord, ItemItemLinkRecord,
    ItemItemLinkTranslationRecord, ItemRecord, ItemTranslationRecord, LanguageRecord,
    LanguageTranslationRecord, PartnerRecord, PartnerTranslationRecord, ProjectRecord,
    ProjectTranslationRecord, TagRecord,
};
use inventory_core::types::EntityId;
use inventory_db::repositories::{
    artist_repo::ArtistRepo, author_repo::AuthorRepo, collection_repo::CollectionRepo,
    context_repo::ContextRepo, country_repo::CountryRepo, item_link_repo::ItemLinkRepo,
    item_repo::ItemRepo, language_repo::LanguageRepo, lookup, partner_repo::PartnerRepo,
    project_repo::ProjectRepo, tag_repo::TagRepo,
};

use crate::strategy::WriteStrategy;

pub struct SqlStrategy {
    pool: MySqlPool,
    /// One timestamp per run keeps created_at/updated_at uniform.
    now: DateTime<Utc>,
}

impl SqlStrategy {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            now: Utc::now(),
        }
    }

    fn mint_id() -> EntityId {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl WriteStrategy for SqlStrategy {
    // -- Reference data ---------------------------------------------------

    async fn write_language(&self, record: &LanguageRecord) -> Result<EntityId, ImportError> {
        LanguageRepo::insert(&self.pool, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(record.id.clone())
    }

    async fn write_language_translation(
        &self,
        record: &LanguageTranslationRecord,
    ) -> Result<(), ImportError> {
        LanguageRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_country(&self, record: &CountryRecord) -> Result<EntityId, ImportError> {
        CountryRepo::insert(&self.pool, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(record.id.clone())
    }

    async fn write_country_translation(
        &self,
        record: &CountryTranslationRecord,
    ) -> Result<(), ImportError> {
        CountryRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    // -- Core entities ----------------------------------------------------

    async fn write_context(&self, record: &ContextRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        ContextRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_context_translation(
        &self,
        record: &ContextTranslationRecord,
    ) -> Result<(), ImportError> {
        ContextRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_collection(&self, record: &CollectionRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        CollectionRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_collection_translation(
        &self,
        record: &CollectionTranslationRecord,
    ) -> Result<(), ImportError> {
        CollectionRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_project(&self, record: &ProjectRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        ProjectRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_project_translation(
        &self,
        record: &ProjectTranslationRecord,
    ) -> Result<(), ImportError> {
        ProjectRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_partner(&self, record: &PartnerRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        PartnerRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_partner_translation(
        &self,
        record: &PartnerTranslationRecord,
    ) -> Result<(), ImportError> {
        PartnerRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_item(&self, record: &ItemRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        ItemRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_item_translation(
        &self,
        record: &ItemTranslationRecord,
    ) -> Result<(), ImportError> {
        ItemRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    async fn write_item_link(
        &self,
        record: &ItemItemLinkRecord,
    ) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        ItemLinkRepo::insert(&self.pool, &id, record, self.now)
            .await
            .map_err(ImportError::db)?;
        Ok(id)
    }

    async fn write_item_link_translation(
        &self,
        record: &ItemItemLinkTranslationRecord,
    ) -> Result<(), ImportError> {
        ItemLinkRepo::insert_translation(&self.pool, &Self::mint_id(), record, self.now)
            .await
            .map_err(ImportError::db)
    }

    // -- Supporting entities ----------------------------------------------

    async fn write_tag(&self, record: &TagRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        match TagRepo::insert(&self.pool, &id, record, self.now).await {
            Ok(()) => Ok(id),
            // A unique-key rejection means the tag already exists; resolve
            // to the existing row instead of failing the record.
            Err(insert_err) => {
                match lookup::find_by_backward_compatibility(
                    &self.pool,
                    "tags",
                    &record.backward_compatibility,
                )
                .await
                .map_err(ImportError::db)?
                {
                    Some(existing) => Ok(existing),
                    None => Err(ImportError::db(insert_err)),
                }
            }
        }
    }

    async fn write_author(&self, record: &AuthorRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        match AuthorRepo::insert(&self.pool, &id, record, self.now).await {
            Ok(()) => Ok(id),
            Err(insert_err) => {
                match lookup::find_by_backward_compatibility(
                    &self.pool,
                    "authors",
                    &record.backward_compatibility,
                )
                .await
                .map_err(ImportError::db)?
                {
                    Some(existing) => Ok(existing),
                    None => Err(ImportError::db(insert_err)),
                }
            }
        }
    }

    async fn write_artist(&self, record: &ArtistRecord) -> Result<EntityId, ImportError> {
        let id = Self::mint_id();
        match ArtistRepo::insert(&self.pool, &id, record, self.now).await {
            Ok(()) => Ok(id),
            Err(insert_err) => {
                match lookup::find_by_backward_compatibility(
                    &self.pool,
                    "artists",
                    &record.backward_compatibility,
                )
                .await
                .map_err(ImportError::db)?
                {
                    Some(existing) => Ok(existing),
                    None => Err(ImportError::db(insert_err)),
                }
            }
        }
    }

    // -- Defaults ---------------------------------------------------------

    async fn set_default_language(&self, id: &str) -> Result<(), ImportError> {
        LanguageRepo::set_default(&self.pool, id)
            .await
            .map_err(ImportError::db)
    }

    async fn set_default_context(&self, id: &str) -> Result<(), ImportError> {
        ContextRepo::set_default(&self.pool, id)
            .await
            .map_err(ImportError::db)
    }

    // -- Attaches ---------------------------------------------------------

    async fn attach_tags_to_item(
        &self,
        item_id: &str,
        tag_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        for tag_id in tag_ids {
            ItemRepo::attach_tag(&self.pool, item_id, tag_id, self.now)
                .await
                .map_err(ImportError::db)?;
        }
        Ok(())
    }

    async fn attach_artists_to_item(
        &self,
        item_id: &str,
        artist_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        for artist_id in artist_ids {
            ItemRepo::attach_artist(&self.pool, item_id, artist_id, self.now)
                .await
                .map_err(ImportError::db)?;
        }
        Ok(())
    }

    async fn attach_items_to_collection(
        &self,
        collection_id: &str,
        item_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        for item_id in item_ids {
            CollectionRepo::attach_item(&self.pool, collection_id, item_id, self.now)
                .await
                .map_err(ImportError::db)?;
        }
        Ok(())
    }

    async fn attach_partners_to_collection(
        &self,
        collection_id: &str,
        partner_ids: &[EntityId],
        collection_type: &str,
    ) -> Result<(), ImportError> {
        for partner_id in partner_ids {
            CollectionRepo::attach_partner(
                &self.pool,
                collection_id,
                partner_id,
                collection_type,
                self.now,
            )
            .await
            .map_err(ImportError::db)?;
        }
        Ok(())
    }

    // -- Lookups ----------------------------------------------------------

    async fn exists(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<bool, ImportError> {
        lookup::exists(&self.pool, table, backward_compatibility)
            .await
            .map_err(ImportError::db)
    }

    async fn find_by_backward_compatibility(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<Option<EntityId>, ImportError> {
        lookup::find_by_backward_compatibility(&self.pool, table, backward_compatibility)
            .await
            .map_err(ImportError::db)
    }
}
