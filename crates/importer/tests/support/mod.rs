//! In-memory fakes for both pipeline contracts.
//!
//! `FixtureSource` serves canned legacy rows and records which tables
//! were read; `RecordingStrategy` captures every write call as
//! (method, payload JSON) and serves canned lookup results.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use inventory_core::error::ImportError;
use inventory_core::record::{
    ArtistRecord, AuthorRecord, CollectionRecord, CollectionTranslationRecord, ContextRecord,
    ContextTranslationRecord, CountryRecord, CountryTranslationRecord, ItemItemLinkRecord,
    ItemItemLinkTranslationRecord, ItemRecord, ItemTranslationRecord, LanguageRecord,
    LanguageTranslationRecord, PartnerRecord, PartnerTranslationRecord, ProjectRecord,
    ProjectTranslationRecord, TagRecord,
};
use inventory_core::types::EntityId;
use inventory_db::models::legacy::{
    LegacyCountryName, LegacyInstitution, LegacyInstitutionName, LegacyLanguageName,
    LegacyMonument, LegacyMonumentMonumentLink, LegacyMuseum, LegacyMuseumName, LegacyObject,
    LegacyObjectMonumentLink, LegacyObjectObjectLink, LegacyProject, LegacyProjectName,
};
use inventory_importer::source::LegacySource;
use inventory_importer::strategy::WriteStrategy;

// ── FixtureSource ────────────────────────────────────────────────────

#[derive(Default)]
pub struct FixtureData {
    pub language_names: Vec<LegacyLanguageName>,
    pub country_names: Vec<LegacyCountryName>,
    pub projects: Vec<LegacyProject>,
    pub project_names: Vec<LegacyProjectName>,
    pub museums: Vec<LegacyMuseum>,
    pub museum_names: Vec<LegacyMuseumName>,
    pub institutions: Vec<LegacyInstitution>,
    pub institution_names: Vec<LegacyInstitutionName>,
    pub objects: Vec<LegacyObject>,
    pub monuments: Vec<LegacyMonument>,
    pub object_object_links: Vec<LegacyObjectObjectLink>,
    pub object_monument_links: Vec<LegacyObjectMonumentLink>,
    pub monument_monument_links: Vec<LegacyMonumentMonumentLink>,
}

#[derive(Clone, Default)]
pub struct FixtureSource {
    data: Arc<FixtureData>,
    reads: Arc<Mutex<Vec<&'static str>>>,
}

impl FixtureSource {
    pub fn new(data: FixtureData) -> Self {
        Self {
            data: Arc::new(data),
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Tables read so far, in order.
    pub fn reads(&self) -> Vec<&'static str> {
        self.reads.lock().unwrap().clone()
    }

    fn record(&self, table: &'static str) {
        self.reads.lock().unwrap().push(table);
    }
}

#[async_trait]
impl LegacySource for FixtureSource {
    async fn language_names(&self) -> Result<Vec<LegacyLanguageName>, ImportError> {
        self.record("langnames");
        Ok(self.data.language_names.clone())
    }

    async fn country_names(&self) -> Result<Vec<LegacyCountryName>, ImportError> {
        self.record("countrynames");
        Ok(self.data.country_names.clone())
    }

    async fn projects(&self) -> Result<Vec<LegacyProject>, ImportError> {
        self.record("projects");
        Ok(self.data.projects.clone())
    }

    async fn project_names(&self) -> Result<Vec<LegacyProjectName>, ImportError> {
        self.record("projectnames");
        Ok(self.data.project_names.clone())
    }

    async fn museums(&self) -> Result<Vec<LegacyMuseum>, ImportError> {
        self.record("museums");
        Ok(self.data.museums.clone())
    }

    async fn museum_names(&self) -> Result<Vec<LegacyMuseumName>, ImportError> {
        self.record("museumnames");
        Ok(self.data.museum_names.clone())
    }

    async fn institutions(&self) -> Result<Vec<LegacyInstitution>, ImportError> {
        self.record("institutions");
        Ok(self.data.institutions.clone())
    }

    async fn institution_names(&self) -> Result<Vec<LegacyInstitutionName>, ImportError> {
        self.record("institutionnames");
        Ok(self.data.institution_names.clone())
    }

    async fn objects(&self) -> Result<Vec<LegacyObject>, ImportError> {
        self.record("objects");
        Ok(self.data.objects.clone())
    }

    async fn monuments(&self) -> Result<Vec<LegacyMonument>, ImportError> {
        self.record("monuments");
        Ok(self.data.monuments.clone())
    }

    async fn object_object_links(&self) -> Result<Vec<LegacyObjectObjectLink>, ImportError> {
        self.record("objects_objects");
        Ok(self.data.object_object_links.clone())
    }

    async fn object_monument_links(&self) -> Result<Vec<LegacyObjectMonumentLink>, ImportError> {
        self.record("objects_monuments");
        Ok(self.data.object_monument_links.clone())
    }

    async fn monument_monument_links(
        &self,
    ) -> Result<Vec<LegacyMonumentMonumentLink>, ImportError> {
        self.record("monuments_monuments");
        Ok(self.data.monument_monument_links.clone())
    }
}

// ── RecordingStrategy ────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub payload: Value,
}

#[derive(Clone, Default)]
pub struct RecordingStrategy {
    calls: Arc<Mutex<Vec<Call>>>,
    /// Canned lookup results keyed by (table, backward_compatibility).
    lookups: Arc<Mutex<HashMap<(String, String), EntityId>>>,
    counter: Arc<AtomicUsize>,
}

impl RecordingStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a lookup result, simulating a row already present in the
    /// target database.
    pub fn preload_lookup(&self, table: &str, key: &str, id: &str) {
        self.lookups
            .lock()
            .unwrap()
            .insert((table.to_string(), key.to_string()), id.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    pub fn payloads(&self, method: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method)
            .map(|c| c.payload.clone())
            .collect()
    }

    /// Total write/attach/default calls (lookups excluded).
    pub fn write_call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.method.starts_with("lookup_"))
            .count()
    }

    fn record<T: Serialize>(&self, method: &'static str, payload: &T) {
        self.calls.lock().unwrap().push(Call {
            method,
            payload: serde_json::to_value(payload).unwrap(),
        });
    }

    fn mint(&self) -> EntityId {
        format!("id-{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl WriteStrategy for RecordingStrategy {
    async fn write_language(&self, record: &LanguageRecord) -> Result<EntityId, ImportError> {
        self.record("write_language", record);
        Ok(record.id.clone())
    }

    async fn write_language_translation(
        &self,
        record: &LanguageTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_language_translation", record);
        Ok(())
    }

    async fn write_country(&self, record: &CountryRecord) -> Result<EntityId, ImportError> {
        self.record("write_country", record);
        Ok(record.id.clone())
    }

    async fn write_country_translation(
        &self,
        record: &CountryTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_country_translation", record);
        Ok(())
    }

    async fn write_context(&self, record: &ContextRecord) -> Result<EntityId, ImportError> {
        self.record("write_context", record);
        Ok(self.mint())
    }

    async fn write_context_translation(
        &self,
        record: &ContextTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_context_translation", record);
        Ok(())
    }

    async fn write_collection(&self, record: &CollectionRecord) -> Result<EntityId, ImportError> {
        self.record("write_collection", record);
        Ok(self.mint())
    }

    async fn write_collection_translation(
        &self,
        record: &CollectionTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_collection_translation", record);
        Ok(())
    }

    async fn write_project(&self, record: &ProjectRecord) -> Result<EntityId, ImportError> {
        self.record("write_project", record);
        Ok(self.mint())
    }

    async fn write_project_translation(
        &self,
        record: &ProjectTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_project_translation", record);
        Ok(())
    }

    async fn write_partner(&self, record: &PartnerRecord) -> Result<EntityId, ImportError> {
        self.record("write_partner", record);
        Ok(self.mint())
    }

    async fn write_partner_translation(
        &self,
        record: &PartnerTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_partner_translation", record);
        Ok(())
    }

    async fn write_item(&self, record: &ItemRecord) -> Result<EntityId, ImportError> {
        self.record("write_item", record);
        Ok(self.mint())
    }

    async fn write_item_translation(
        &self,
        record: &ItemTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_item_translation", record);
        Ok(())
    }

    async fn write_item_link(
        &self,
        record: &ItemItemLinkRecord,
    ) -> Result<EntityId, ImportError> {
        self.record("write_item_link", record);
        Ok(self.mint())
    }

    async fn write_item_link_translation(
        &self,
        record: &ItemItemLinkTranslationRecord,
    ) -> Result<(), ImportError> {
        self.record("write_item_link_translation", record);
        Ok(())
    }

    async fn write_tag(&self, record: &TagRecord) -> Result<EntityId, ImportError> {
        self.record("write_tag", record);
        Ok(self.mint())
    }

    async fn write_author(&self, record: &AuthorRecord) -> Result<EntityId, ImportError> {
        self.record("write_author", record);
        Ok(self.mint())
    }

    async fn write_artist(&self, record: &ArtistRecord) -> Result<EntityId, ImportError> {
        self.record("write_artist", record);
        Ok(self.mint())
    }

    async fn set_default_language(&self, id: &str) -> Result<(), ImportError> {
        self.record("set_default_language", &serde_json::json!({ "id": id }));
        Ok(())
    }

    async fn set_default_context(&self, id: &str) -> Result<(), ImportError> {
        self.record("set_default_context", &serde_json::json!({ "id": id }));
        Ok(())
    }

    async fn attach_tags_to_item(
        &self,
        item_id: &str,
        tag_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        self.record(
            "attach_tags_to_item",
            &serde_json::json!({ "item_id": item_id, "tag_ids": tag_ids }),
        );
        Ok(())
    }

    async fn attach_artists_to_item(
        &self,
        item_id: &str,
        artist_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        self.record(
            "attach_artists_to_item",
            &serde_json::json!({ "item_id": item_id, "artist_ids": artist_ids }),
        );
        Ok(())
    }

    async fn attach_items_to_collection(
        &self,
        collection_id: &str,
        item_ids: &[EntityId],
    ) -> Result<(), ImportError> {
        self.record(
            "attach_items_to_collection",
            &serde_json::json!({ "collection_id": collection_id, "item_ids": item_ids }),
        );
        Ok(())
    }

    async fn attach_partners_to_collection(
        &self,
        collection_id: &str,
        partner_ids: &[EntityId],
        collection_type: &str,
    ) -> Result<(), ImportError> {
        self.record(
            "attach_partners_to_collection",
            &serde_json::json!({
                "collection_id": collection_id,
                "partner_ids": partner_ids,
                "collection_type": collection_type,
            }),
        );
        Ok(())
    }

    async fn exists(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<bool, ImportError> {
        self.record(
            "lookup_exists",
            &serde_json::json!({ "table": table, "key": backward_compatibility }),
        );
        Ok(self
            .lookups
            .lock()
            .unwrap()
            .contains_key(&(table.to_string(), backward_compatibility.to_string())))
    }

    async fn find_by_backward_compatibility(
        &self,
        table: &str,
        backward_compatibility: &str,
    ) -> Result<Option<EntityId>, ImportError> {
        self.record(
            "lookup_find",
            &serde_json::json!({ "table": table, "key": backward_compatibility }),
        );
        Ok(self
            .lookups
            .lock()
            .unwrap()
            .get(&(table.to_string(), backward_compatibility.to_string()))
            .cloned())
    }
}

// ── Legacy row builders ──────────────────────────────────────────────

pub fn language_name(lang_id: &str, lang: &str, name: &str) -> LegacyLanguageName {
    LegacyLanguageName {
        lang_id: lang_id.to_string(),
        lang: lang.to_string(),
        name: name.to_string(),
    }
}

pub fn country_name(country_id: &str, lang: &str, name: &str) -> LegacyCountryName {
    LegacyCountryName {
        country_id: country_id.to_string(),
        lang: lang.to_string(),
        name: name.to_string(),
    }
}

pub fn project(project_id: &str) -> LegacyProject {
    LegacyProject {
        project_id: project_id.to_string(),
        launchdate: None,
        active: Some(true),
    }
}

pub fn project_name(project_id: &str, lang: &str, name: &str) -> LegacyProjectName {
    LegacyProjectName {
        project_id: project_id.to_string(),
        lang: lang.to_string(),
        name: name.to_string(),
        description: None,
    }
}

pub fn museum(museum_id: &str, country: &str, name: &str) -> LegacyMuseum {
    LegacyMuseum {
        museum_id: museum_id.to_string(),
        country: country.to_string(),
        name: name.to_string(),
        city: None,
        address: None,
        phone: None,
        email: None,
        url: None,
        project_id: None,
        geo_coordinates: None,
    }
}

pub fn museum_name(museum_id: &str, country: &str, lang: &str, name: &str) -> LegacyMuseumName {
    LegacyMuseumName {
        museum_id: museum_id.to_string(),
        country: country.to_string(),
        lang: lang.to_string(),
        name: name.to_string(),
        city: None,
        description: None,
    }
}

pub fn object_row(
    project_id: &str,
    country: &str,
    museum_id: &str,
    number: &str,
    lang: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> LegacyObject {
    LegacyObject {
        project_id: project_id.to_string(),
        country: country.to_string(),
        museum_id: museum_id.to_string(),
        number: number.to_string(),
        lang: lang.to_string(),
        working_number: None,
        inventory_id: None,
        name: name.map(String::from),
        name2: None,
        type_of: None,
        holding_museum: None,
        location: None,
        province: None,
        date_description: None,
        dynasty: None,
        current_owner: None,
        original_owner: None,
        dimensions: None,
        materials: None,
        artist: None,
        birthplace: None,
        deathplace: None,
        birthdate: None,
        deathdate: None,
        period_activity: None,
        production_place: None,
        description: description.map(String::from),
        bibliography: None,
        keywords: None,
        preparedby: None,
    }
}

pub fn object_object_link(
    id: i64,
    source_number: &str,
    target_number: &str,
) -> LegacyObjectObjectLink {
    LegacyObjectObjectLink {
        id,
        o1_project_id: "ISL".to_string(),
        o1_country_id: "eg".to_string(),
        o1_museum_id: "MUS01".to_string(),
        o1_number: source_number.to_string(),
        o2_project_id: "ISL".to_string(),
        o2_country_id: "eg".to_string(),
        o2_museum_id: "MUS01".to_string(),
        o2_number: target_number.to_string(),
    }
}
