//! Country-name translations from `mwnf3.countrynames`.
//!
//! Duplicate (country, language) keys occur in the legacy data; the
//! second row is a duplicate skip, logged as such, and nothing is
//! overwritten.

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::{map_country_code, map_language_code};
use inventory_core::record::CountryTranslationRecord;
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;

use crate::context::ImportContext;
use crate::importers::Importer;

pub struct CountryTranslationsImporter;

#[async_trait]
impl Importer for CountryTranslationsImporter {
    fn key(&self) -> &'static str {
        "country-translation"
    }

    fn name(&self) -> &'static str {
        "Country Translations"
    }

    fn description(&self) -> &'static str {
        "Import country name translations from countrynames"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["language", "country"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();

        let rows = ctx.legacy.country_names().await?;
        tracing::info!(count = rows.len(), "Importing country translations");

        for row in &rows {
            let row_key = format!("{}:{}", row.country_id, row.lang);

            let country_id = match map_country_code(&row.country_id) {
                Ok(code) => code,
                Err(err) => {
                    result.record_error(format!("{row_key}: {err}"));
                    ctx.mark_error();
                    continue;
                }
            };
            let language_id = match map_language_code(&row.lang) {
                Ok(code) => code,
                Err(err) => {
                    result.record_error(format!("{row_key}: {err}"));
                    ctx.mark_error();
                    continue;
                }
            };

            let key =
                backward_compatibility("mwnf3", "countrynames", &[&row.country_id, &row.lang]);

            if ctx.entity_exists(&key, EntityType::CountryTranslation) {
                tracing::warn!(
                    key = %key,
                    name = %row.name,
                    "Duplicate country translation, keeping the first row",
                );
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            ctx.collect_sample(
                "country_translation",
                row,
                SampleReason::Foundation,
                None,
                Some(language_id),
            );

            if ctx.skip_writes() {
                ctx.register_placeholder(&key, EntityType::CountryTranslation);
                result.imported += 1;
                ctx.mark_progress();
                continue;
            }

            let record = CountryTranslationRecord {
                country_id: country_id.to_string(),
                language_id: language_id.to_string(),
                name: row.name.clone(),
                backward_compatibility: key.clone(),
            };

            match ctx.strategy.write_country_translation(&record).await {
                Ok(()) => {
                    ctx.register(key.clone(), &key, EntityType::CountryTranslation);
                    result.imported += 1;
                    ctx.mark_progress();
                }
                Err(err) => {
                    result.record_error(format!("{row_key}: {err}"));
                    ctx.mark_error();
                }
            }
        }

        Ok(result.finish())
    }
}
