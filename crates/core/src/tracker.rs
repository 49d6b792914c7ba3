//! In-memory backward-compatibility tracker.
//!
//! The tracker maps (entity type, legacy key) pairs to the identifiers
//! minted during the current run, and carries a flat metadata store for
//! cross-phase globals (default language, default context). It is the
//! single source of truth for cross-phase reference resolution within one
//! run; lookups miss silently and callers decide whether that is fatal.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

use crate::entity::EntityType;
use crate::types::{EntityId, Timestamp};

/// A registered mapping from a legacy key to a minted identifier.
#[derive(Debug, Clone)]
pub struct TrackedEntity {
    pub uuid: EntityId,
    pub backward_compatibility: String,
    pub entity_type: EntityType,
    pub created_at: Timestamp,
}

/// In-memory map from (entity type, lower-cased legacy key) to the newly
/// minted identifier. Single-threaded by construction: the import context
/// hands out `&mut` access sequentially.
#[derive(Debug, Default)]
pub struct Tracker {
    entries: HashMap<(EntityType, String), TrackedEntity>,
    metadata: HashMap<String, String>,
}

fn normalize(key: &str) -> String {
    key.to_lowercase()
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the mapping for this entity.
    pub fn register(&mut self, entity: TrackedEntity) {
        let key = (entity.entity_type, normalize(&entity.backward_compatibility));
        self.entries.insert(key, entity);
    }

    /// Insert a mapping if absent; if an entry already exists, update only
    /// its uuid (first-writer-wins for everything else).
    pub fn set(&mut self, key: &str, uuid: impl Into<EntityId>, entity_type: EntityType) {
        match self.entries.entry((entity_type, normalize(key))) {
            Entry::Occupied(mut existing) => existing.get_mut().uuid = uuid.into(),
            Entry::Vacant(slot) => {
                slot.insert(TrackedEntity {
                    uuid: uuid.into(),
                    backward_compatibility: key.to_string(),
                    entity_type,
                    created_at: Utc::now(),
                });
            }
        }
    }

    /// Whether a mapping exists for this (key, entity type) pair.
    pub fn exists(&self, key: &str, entity_type: EntityType) -> bool {
        self.entries.contains_key(&(entity_type, normalize(key)))
    }

    /// Look up the minted identifier for a legacy key.
    pub fn uuid_for(&self, key: &str, entity_type: EntityType) -> Option<&str> {
        self.entries
            .get(&(entity_type, normalize(key)))
            .map(|e| e.uuid.as_str())
    }

    /// Entry counts per entity type, zero-filled for types with no entries.
    pub fn stats(&self) -> BTreeMap<EntityType, usize> {
        let mut stats: BTreeMap<EntityType, usize> =
            EntityType::ALL.iter().map(|ty| (*ty, 0)).collect();
        for (ty, _) in self.entries.keys() {
            *stats.entry(*ty).or_default() += 1;
        }
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full reset: drops all entries and metadata.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.metadata.clear();
    }

    /// Store a cross-phase global (e.g. `default_language_id`).
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Look up a cross-phase global.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
