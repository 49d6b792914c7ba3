//! Shared per-run state threaded through every importer.
//!
//! The context owns the legacy source, the write strategy, the tracker,
//! and the run flags. It replaces ambient globals: every importer receives
//! `&mut ImportContext` and nothing else, so the single-threaded access
//! pattern is enforced by the borrow checker rather than by locks.

use std::io::Write as _;

use chrono::Utc;
use serde::Serialize;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::sample::SampleReason;
use inventory_core::tracker::{TrackedEntity, Tracker};
use inventory_core::types::EntityId;

use crate::samples::SampleCollector;
use crate::source::LegacySource;
use crate::strategy::WriteStrategy;

/// Tracker metadata key for the default language id.
pub const META_DEFAULT_LANGUAGE: &str = "default_language_id";
/// Tracker metadata key for the default context id.
pub const META_DEFAULT_CONTEXT: &str = "default_context_id";

pub struct ImportContext {
    pub legacy: Box<dyn LegacySource>,
    pub strategy: Box<dyn WriteStrategy>,
    pub tracker: Tracker,
    /// Suppress all strategy writes while exercising transformation logic.
    pub dry_run: bool,
    /// Like dry-run, but runs purely to feed the sample collector.
    pub sample_only: bool,
    pub samples: Option<SampleCollector>,
}

impl ImportContext {
    pub fn new(legacy: Box<dyn LegacySource>, strategy: Box<dyn WriteStrategy>) -> Self {
        Self {
            legacy,
            strategy,
            tracker: Tracker::new(),
            dry_run: false,
            sample_only: false,
            samples: None,
        }
    }

    /// Whether strategy writes are suppressed this run.
    pub fn skip_writes(&self) -> bool {
        self.dry_run || self.sample_only
    }

    // -- Cross-phase defaults ---------------------------------------------

    /// The default language id, resolved during the language phase.
    pub fn default_language_id(&self) -> Result<EntityId, ImportError> {
        self.tracker
            .metadata(META_DEFAULT_LANGUAGE)
            .map(str::to_string)
            .ok_or(ImportError::MissingDefault {
                what: "Default language ID",
                hint: "The language import must run first.",
            })
    }

    /// The default context id, resolved during the context phase.
    pub fn default_context_id(&self) -> Result<EntityId, ImportError> {
        self.tracker
            .metadata(META_DEFAULT_CONTEXT)
            .map(str::to_string)
            .ok_or(ImportError::MissingDefault {
                what: "Default context ID",
                hint: "The default context import must run first.",
            })
    }

    // -- Tracker access ---------------------------------------------------

    pub fn register(&mut self, uuid: impl Into<EntityId>, key: &str, entity_type: EntityType) {
        self.tracker.register(TrackedEntity {
            uuid: uuid.into(),
            backward_compatibility: key.to_string(),
            entity_type,
            created_at: Utc::now(),
        });
    }

    /// Register a placeholder id so later phases can resolve references in
    /// dry-run and sample-only modes.
    pub fn register_placeholder(&mut self, key: &str, entity_type: EntityType) -> EntityId {
        let uuid = format!("dry-run:{entity_type}:{key}");
        self.register(uuid.clone(), key, entity_type);
        uuid
    }

    /// Tracker-only existence check.
    pub fn entity_exists(&self, key: &str, entity_type: EntityType) -> bool {
        self.tracker.exists(key, entity_type)
    }

    /// Tracker-only id lookup.
    pub fn entity_uuid(&self, key: &str, entity_type: EntityType) -> Option<EntityId> {
        self.tracker.uuid_for(key, entity_type).map(str::to_string)
    }

    /// Existence check with database fallback: the tracker is the fast
    /// path; on a miss the strategy lookup is consulted and a hit is
    /// cached back into the tracker.
    pub async fn entity_exists_or_lookup(
        &mut self,
        key: &str,
        entity_type: EntityType,
    ) -> Result<bool, ImportError> {
        Ok(self.entity_uuid_or_lookup(key, entity_type).await?.is_some())
    }

    /// Id lookup with database fallback and cache-after-fallback.
    pub async fn entity_uuid_or_lookup(
        &mut self,
        key: &str,
        entity_type: EntityType,
    ) -> Result<Option<EntityId>, ImportError> {
        if let Some(uuid) = self.tracker.uuid_for(key, entity_type) {
            return Ok(Some(uuid.to_string()));
        }
        let found = self
            .strategy
            .find_by_backward_compatibility(entity_type.table(), key)
            .await?;
        if let Some(uuid) = &found {
            self.tracker.set(key, uuid.clone(), entity_type);
        }
        Ok(found)
    }

    // -- Sample collection ------------------------------------------------

    /// Forward a raw legacy record to the sample collector, if enabled.
    /// Serialization or write failures are logged and swallowed.
    pub fn collect_sample<T: Serialize>(
        &mut self,
        entity_type: &str,
        data: &T,
        reason: SampleReason,
        details: Option<&str>,
        language: Option<&str>,
    ) {
        let Some(collector) = &mut self.samples else {
            return;
        };
        match serde_json::to_value(data) {
            Ok(raw) => collector.collect(entity_type, raw, reason, details, language),
            Err(err) => {
                tracing::warn!(entity_type, error = %err, "Failed to serialize sample");
            }
        }
    }

    // -- Progress marks ---------------------------------------------------

    pub fn mark_progress(&self) {
        print!(".");
        let _ = std::io::stdout().flush();
    }

    pub fn mark_skipped(&self) {
        print!("s");
        let _ = std::io::stdout().flush();
    }

    pub fn mark_error(&self) {
        print!("x");
        let _ = std::io::stdout().flush();
    }
}
