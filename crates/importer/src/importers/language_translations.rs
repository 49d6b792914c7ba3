//! Language-name translations from `mwnf3.langnames`.
//!
//! Each row names one language in another language; both codes go
//! through the legacy code map. Unknown codes are per-record errors.

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::map_language_code;
use inventory_core::record::LanguageTranslationRecord;
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;

use crate::context::ImportContext;
use crate::importers::Importer;

pub struct LanguageTranslationsImporter;

#[async_trait]
impl Importer for LanguageTranslationsImporter {
    fn key(&self) -> &'static str {
        "language-translation"
    }

    fn name(&self) -> &'static str {
        "Language Translations"
    }

    fn description(&self) -> &'static str {
        "Import language name translations from langnames"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["language"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();

        let rows = ctx.legacy.language_names().await?;
        tracing::info!(count = rows.len(), "Importing language translations");

        for row in &rows {
            let row_key = format!("{}:{}", row.lang_id, row.lang);

            let language_id = match map_language_code(&row.lang_id) {
                Ok(code) => code,
                Err(err) => {
                    result.record_error(format!("{row_key}: {err}"));
                    ctx.mark_error();
                    continue;
                }
            };
            let display_language_id = match map_language_code(&row.lang) {
                Ok(code) => code,
                Err(err) => {
                    result.record_error(format!("{row_key}: {err}"));
                    ctx.mark_error();
                    continue;
                }
            };

            let key = backward_compatibility("mwnf3", "langnames", &[&row.lang_id, &row.lang]);

            if ctx.entity_exists(&key, EntityType::LanguageTranslation) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            ctx.collect_sample(
                "language_translation",
                row,
                SampleReason::Foundation,
                None,
                Some(display_language_id),
            );

            if ctx.skip_writes() {
                ctx.register_placeholder(&key, EntityType::LanguageTranslation);
                result.imported += 1;
                ctx.mark_progress();
                continue;
            }

            let record = LanguageTranslationRecord {
                language_id: language_id.to_string(),
                display_language_id: display_language_id.to_string(),
                name: row.name.clone(),
                backward_compatibility: key.clone(),
            };

            match ctx.strategy.write_language_translation(&record).await {
                Ok(()) => {
                    // Translations are tracked for dedup only; the key
                    // doubles as the tracked id.
                    ctx.register(key.clone(), &key, EntityType::LanguageTranslation);
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
