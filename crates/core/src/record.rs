//! Write-payload records.
//!
//! Each record is the fully-transformed shape handed to a write strategy;
//! field names match the target schema columns (and, for the API
//! strategy, the store-request body). Defaults are deliberately absent
//! here: a language or context becomes the default through a dedicated
//! strategy call, never through a store payload.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

// ── Reference data ───────────────────────────────────────────────────

/// Language store payload. `id` is the ISO 639-3 code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub id: EntityId,
    pub internal_name: String,
    pub iso_code: String,
    pub backward_compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTranslationRecord {
    /// The language being named.
    pub language_id: EntityId,
    /// The language the name is written in.
    pub display_language_id: EntityId,
    pub name: String,
    pub backward_compatibility: String,
}

/// Country store payload. `id` is the ISO 3166-1 alpha-3 code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: EntityId,
    pub internal_name: String,
    pub backward_compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTranslationRecord {
    pub country_id: EntityId,
    pub language_id: EntityId,
    pub name: String,
    pub backward_compatibility: String,
}

// ── Contexts, collections, projects ──────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub internal_name: String,
    pub backward_compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextTranslationRecord {
    pub context_id: EntityId,
    pub language_id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub context_id: EntityId,
    pub language_id: EntityId,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
    /// collection, exhibition, gallery, theme, itinerary, location.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionTranslationRecord {
    pub collection_id: EntityId,
    pub language_id: EntityId,
    pub context_id: EntityId,
    pub backward_compatibility: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub context_id: EntityId,
    pub language_id: EntityId,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    pub is_launched: bool,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTranslationRecord {
    pub project_id: EntityId,
    pub language_id: EntityId,
    pub context_id: EntityId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ── Partners ─────────────────────────────────────────────────────────

/// Museums hold objects; institutions hold monuments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    Museum,
    Institution,
}

impl PartnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Museum => "museum",
            Self::Institution => "institution",
        }
    }
}

impl std::fmt::Display for PartnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    #[serde(rename = "type")]
    pub kind: PartnerKind,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerTranslationRecord {
    pub partner_id: EntityId,
    pub language_id: EntityId,
    pub context_id: EntityId,
    pub backward_compatibility: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

// ── Items ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Object,
    Monument,
    Detail,
    Picture,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Monument => "monument",
            Self::Detail => "detail",
            Self::Picture => "picture",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<EntityId>,
    /// Inventory number at the holding partner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_reference: Option<String>,
    /// Working number assigned during cataloguing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mwnf_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTranslationRecord {
    pub item_id: EntityId,
    pub language_id: EntityId,
    pub context_id: EntityId,
    pub backward_compatibility: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_production: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<EntityId>,
    /// JSON bag for legacy columns without a dedicated target column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

// ── Item links ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemItemLinkRecord {
    pub source_id: EntityId,
    pub target_id: EntityId,
    pub context_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backward_compatibility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemItemLinkTranslationRecord {
    pub item_item_link_id: EntityId,
    pub language_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reciprocal_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backward_compatibility: Option<String>,
}

// ── Supporting entities ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub internal_name: String,
    pub backward_compatibility: String,
    /// Tag grouping: material, dynasty, keyword.
    pub category: String,
    pub language_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub internal_name: String,
    pub backward_compatibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_of_activity: Option<String>,
}
