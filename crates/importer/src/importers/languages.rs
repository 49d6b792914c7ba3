//! Language reference-data importer.
//!
//! Languages come from the bundled JSON seed, not the legacy database.
//! The store payload never carries a default flag: the default language
//! triggers one dedicated `set_default_language` call and is recorded in
//! tracker metadata for later phases.

use async_trait::async_trait;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::LanguageRecord;
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;

use crate::context::{ImportContext, META_DEFAULT_LANGUAGE};
use crate::importers::Importer;
use crate::seed::LanguageSeed;

pub struct LanguagesImporter {
    seeds: Vec<LanguageSeed>,
}

impl LanguagesImporter {
    pub fn new(seeds: Vec<LanguageSeed>) -> Self {
        Self { seeds }
    }
}

#[async_trait]
impl Importer for LanguagesImporter {
    fn key(&self) -> &'static str {
        "language"
    }

    fn name(&self) -> &'static str {
        "Languages"
    }

    fn description(&self) -> &'static str {
        "Import language reference data from the JSON seed"
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        tracing::info!(count = self.seeds.len(), "Importing languages");

        for seed in &self.seeds {
            let key = seed.backward_compatibility.as_str();

            if ctx.entity_exists(key, EntityType::Language) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            ctx.collect_sample("language", seed, SampleReason::Foundation, None, None);

            if ctx.skip_writes() {
                // The language id is its ISO code, so the real id is known
                // even without a write.
                ctx.register(seed.id.clone(), key, EntityType::Language);
                if seed.is_default {
                    ctx.tracker.set_metadata(META_DEFAULT_LANGUAGE, seed.id.clone());
                }
                result.imported += 1;
                ctx.mark_progress();
                continue;
            }

            let record = LanguageRecord {
                id: seed.id.clone(),
                internal_name: seed.internal_name.clone(),
                iso_code: seed.id.clone(),
                backward_compatibility: seed.backward_compatibility.clone(),
            };

            let id = match ctx.strategy.write_language(&record).await {
                Ok(id) => id,
                Err(err) => {
                    result.record_error(format!("{}: {err}", seed.id));
                    ctx.mark_error();
                    continue;
                }
            };

            ctx.register(id.clone(), key, EntityType::Language);

            if seed.is_default {
                ctx.strategy.set_default_language(&id).await?;
                ctx.tracker.set_metadata(META_DEFAULT_LANGUAGE, id);
            }

            result.imported += 1;
            ctx.mark_progress();
        }

        Ok(result.finish())
    }
}
