//! Write contract for the target system.
//!
//! One write method per entity kind, each taking a fully-transformed
//! record and returning the assigned identifier (translations and
//! attaches return unit). Implementations differ only in transport:
//! direct SQL inserts or the REST API. Importers stay transport-agnostic;
//! transport errors propagate to the caller, which decides between a
//! per-record error and aborting the phase.
//!
//! A language or context becomes the default through the dedicated
//! `set_default_*` calls; store payloads never carry a default flag.

use async_trait::async_trait;

use inventory_core::error::ImportError;
use inventory_core::record::{
    ArtistRecord, AuthorRecord, CollectionRecord, CollectionTranslationRecord, ContextRecord,
    ContextTranslationRecord, CountryRecord, CountryTranslationRecord, ItemItemLinkRecord,
    ItemItemLinkTranslationRecord, ItemRecord, ItemTranslationRecord, LanguageRecord,
    LanguageTranslationRecord, PartnerRecord, PartnerTranslationRecord, ProjectRecord,
    ProjectTranslationRecord, TagRecord,
};
use inventory_core::types::EntityId;

#[async_trait]
pub trait WriteStrategy: Send + Sync {
    // -- Reference data ---------------------------------------------------

    /// Write a language. Returns the language id (its ISO 639-3 code).
    async fn write_language(&self, record: &LanguageRecord) -> Result<EntityId, ImportError>;

    async fn write_language_translation(
        &self,
        record: &LanguageTranslationRecord,
    ) -> Result<(), ImportError>;

    /// Write a country. Returns the country id (its ISO 3166-1 alpha-3 code).
    async fn write_country(&self, record: &CountryRecord) -> Result<EntityId, ImportError>;

    async fn write_country_translation(
        &self,
        record: &CountryTranslationRecord,
    ) -> Result<(), ImportError>;

    // -- Core entities ----------------------------------------------------

    async fn write_context(&self, record: &ContextRecord) -> Result<EntityId, ImportError>;

    async fn write_context_translation(
        &self,
        record: &ContextTranslationRecord,
    ) -> Result<(), ImportError>;

    async fn write_collection(&self, record: &CollectionRecord) -> Result<EntityId, ImportError>;

    async fn write_collection_translation(
        &self,
        record: &CollectionTranslationRecord,
    ) -> Result<(), ImportError>;

    async fn write_project(&self, record: &ProjectRecord) -> Result<EntityId, ImportError>;

    async fn write_project_translation(
        &self,
        record: &ProjectTranslationRecord,
    ) -> Result<(), ImportError>;

    async fn write_partner(&self, record: &PartnerRecord) -> Result<EntityId, ImportError>;

    async fn write_partner_translation(
        &self,
        record: &PartnerTranslationRecord,
    ) -> Result<(), ImportError>;

    async fn write_item(&self, record: &ItemRecord) -> Result<EntityId, ImportError>;

    async fn write_item_translation(
        &self,
        record: &ItemTranslationRecord,
    ) -> Result<(), ImportError>;

    async fn write_item_link(&self, record: &ItemItemLinkRecord)
        -> Result<EntityId, ImportError>;

    async fn write_item_link_translation(
        &self,
        record: &ItemItemLinkTranslationRecord,
    ) -> Result<(), ImportError>;

    // -- Supporting entities ----------------------------------------------

    /// Write a tag, or return the existing id when the key is taken
    /// (get-or-create).
    async fn write_tag(&self, record: &TagRecord) -> Result<EntityId, ImportError>;

    async fn write_author(&self, record: &AuthorRecord) -> Result<EntityId, ImportError>;

    async fn write_artist(&self, record: &ArtistRecord) -> Result<EntityId, ImportError>;

    // -- Defaults ---------------------------------------------------------

    async fn set_default_language(&self, id: &str) -> Result<(), ImportError>;

    async fn set_default_context(&self, id: &str) -> Result<(), ImportError>;

    // -- Attaches ---------------------------------------------------------

    async fn attach_tags_to_item(
        &self,
        item_id: &str,
        tag_ids: &[EntityId],
    ) -> Result<(), ImportError>;

    async fn attach_artists_to_item(
        &self,
        item_id: &str,
        artist_ids: &[EntityId],
    ) -> Result<(), ImportError>;

    async fn attach_items_to_collection(
        &self,
        collection_id: &str,
        item_ids: &[EntityId],
    ) -> Result<(), ImportError>;

    async fn attach_partners_to_collection(
        &self,
        collection_id: &str,
        partner_ids: &[EntityId],
        collection_type: &str,
    ) -> Result<(), ImportError>;

    // -- Lookups ----------------------------------------------------------

    /// Whether `table` holds a row with this backward-compatibility key.
    /// Fallback source of truth when the tracker has no entry.
    async fn exists(&self, table: &str, backward_compatibility: &str)
        -> Result<bool, ImportError>;

    /// Find the id in `table` for this backward-compatibility key.
    async fn find_by_backward_compatibility(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<Option<EntityId>, ImportError>;
}
