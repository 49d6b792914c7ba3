//! The closed catalogue of entity types handled by the import pipeline.
//!
//! Entity types namespace the backward-compatibility keys in the tracker:
//! legacy tables reuse the same primary-key values, so a key is only
//! meaningful together with its entity type.

use serde::{Deserialize, Serialize};

/// An entity kind known to the import pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Language,
    LanguageTranslation,
    Country,
    CountryTranslation,
    Context,
    ContextTranslation,
    Collection,
    CollectionTranslation,
    Project,
    ProjectTranslation,
    Partner,
    PartnerTranslation,
    Item,
    ItemTranslation,
    ItemItemLink,
    ItemItemLinkTranslation,
    Tag,
    Author,
    Artist,
}

impl EntityType {
    /// Return the entity type name as used in logs and sample files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::LanguageTranslation => "language_translation",
            Self::Country => "country",
            Self::CountryTranslation => "country_translation",
            Self::Context => "context",
            Self::ContextTranslation => "context_translation",
            Self::Collection => "collection",
            Self::CollectionTranslation => "collection_translation",
            Self::Project => "project",
            Self::ProjectTranslation => "project_translation",
            Self::Partner => "partner",
            Self::PartnerTranslation => "partner_translation",
            Self::Item => "item",
            Self::ItemTranslation => "item_translation",
            Self::ItemItemLink => "item_item_link",
            Self::ItemItemLinkTranslation => "item_item_link_translation",
            Self::Tag => "tag",
            Self::Author => "author",
            Self::Artist => "artist",
        }
    }

    /// Parse an entity type name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == s)
    }

    /// The target table holding this entity kind, used for strategy-side
    /// backward-compatibility lookups.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Language => "languages",
            Self::LanguageTranslation => "language_translations",
            Self::Country => "countries",
            Self::CountryTranslation => "country_translations",
            Self::Context => "contexts",
            Self::ContextTranslation => "context_translations",
            Self::Collection => "collections",
            Self::CollectionTranslation => "collection_translations",
            Self::Project => "projects",
            Self::ProjectTranslation => "project_translations",
            Self::Partner => "partners",
            Self::PartnerTranslation => "partner_translations",
            Self::Item => "items",
            Self::ItemTranslation => "item_translations",
            Self::ItemItemLink => "item_item_links",
            Self::ItemItemLinkTranslation => "item_item_link_translations",
            Self::Tag => "tags",
            Self::Author => "authors",
            Self::Artist => "artists",
        }
    }

    /// All entity types, in catalogue order.
    pub const ALL: [EntityType; 19] = [
        Self::Language,
        Self::LanguageTranslation,
        Self::Country,
        Self::CountryTranslation,
        Self::Context,
        Self::ContextTranslation,
        Self::Collection,
        Self::CollectionTranslation,
        Self::Project,
        Self::ProjectTranslation,
        Self::Partner,
        Self::PartnerTranslation,
        Self::Item,
        Self::ItemTranslation,
        Self::ItemItemLink,
        Self::ItemItemLinkTranslation,
        Self::Tag,
        Self::Author,
        Self::Artist,
    ];
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
