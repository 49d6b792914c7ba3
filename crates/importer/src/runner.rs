//! Importer registry and run loop.
//!
//! Importers run strictly in registry order; `--start-at`, `--stop-at`,
//! and `--only` select a contiguous subrange. Phases skipped that way are
//! compensated at resolution time by the strategy-lookup fallback. An
//! importer that fails outright becomes a failed result; the loop
//! continues with the next importer.

use std::path::Path;
use std::time::Instant;

use inventory_core::error::ImportError;
use inventory_core::result::ImportResult;

use crate::context::ImportContext;
use crate::importers::{
    contexts::DefaultContextImporter, countries::CountriesImporter,
    country_translations::CountryTranslationsImporter, item_links::ItemLinksImporter,
    language_translations::LanguageTranslationsImporter, languages::LanguagesImporter,
    monuments::MonumentsImporter, objects::ObjectsImporter, partners::PartnersImporter,
    projects::ProjectsImporter, Importer,
};
use crate::logger::{FileLogger, PhaseSummary};
use crate::seed;

/// Range selection over the registry.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub start_at: Option<String>,
    pub stop_at: Option<String>,
    pub only: Option<String>,
}

/// Aggregated outcome of a full run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub phases: Vec<PhaseSummary>,
}

impl RunSummary {
    pub fn imported(&self) -> usize {
        self.phases.iter().map(|p| p.imported).sum()
    }

    pub fn skipped(&self) -> usize {
        self.phases.iter().map(|p| p.skipped).sum()
    }

    pub fn errors(&self) -> usize {
        self.phases.iter().map(|p| p.errors).sum()
    }

    pub fn warnings(&self) -> usize {
        self.phases.iter().map(|p| p.warnings).sum()
    }
}

/// Build the full importer registry in dependency order.
pub fn build_importers(seed_dir: &Path) -> Result<Vec<Box<dyn Importer>>, ImportError> {
    let languages = seed::load_language_seeds(seed_dir)?;
    let countries = seed::load_country_seeds(seed_dir)?;

    Ok(vec![
        // Phase 00: reference data
        Box::new(LanguagesImporter::new(languages)),
        Box::new(LanguageTranslationsImporter),
        Box::new(CountriesImporter::new(countries)),
        Box::new(CountryTranslationsImporter),
        Box::new(DefaultContextImporter),
        // Phase 01: core data
        Box::new(ProjectsImporter),
        Box::new(PartnersImporter),
        Box::new(ObjectsImporter),
        Box::new(MonumentsImporter),
        Box::new(ItemLinksImporter),
    ])
}

fn position_of(importers: &[Box<dyn Importer>], key: &str) -> Result<usize, ImportError> {
    importers
        .iter()
        .position(|imp| imp.key() == key)
        .ok_or_else(|| ImportError::UnknownImporter(key.to_string()))
}

/// Decide whether the importer at `index` is inside the selected range.
pub fn should_run(
    importers: &[Box<dyn Importer>],
    index: usize,
    options: &RunOptions,
) -> Result<bool, ImportError> {
    if let Some(only) = &options.only {
        return Ok(index == position_of(importers, only)?);
    }
    if let Some(start_at) = &options.start_at {
        if index < position_of(importers, start_at)? {
            return Ok(false);
        }
    }
    if let Some(stop_at) = &options.stop_at {
        if index > position_of(importers, stop_at)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Run the selected importers in order and aggregate their results.
pub async fn run(
    importers: &[Box<dyn Importer>],
    ctx: &mut ImportContext,
    options: &RunOptions,
    logger: &mut FileLogger,
) -> Result<RunSummary, ImportError> {
    let mut phases = Vec::new();

    for (index, importer) in importers.iter().enumerate() {
        if !should_run(importers, index, options)? {
            tracing::info!(importer = importer.name(), "Skipping importer");
            continue;
        }

        logger.phase_start(importer.name());
        logger.importer_start(importer.name());
        let started = Instant::now();

        let result = match importer.run(ctx).await {
            Ok(result) => result,
            Err(err) => {
                // Importer-level failure (configuration error, dead legacy
                // connection): record and keep going.
                logger.importer_error(importer.name(), &err.to_string());
                let mut failed = ImportResult::new();
                failed.record_error(err.to_string());
                failed.finish()
            }
        };

        // Terminate the progress-mark line.
        println!();

        for warning in &result.warnings {
            logger.warning(&format!("{}: {warning}", importer.name()));
        }
        for error in &result.errors {
            logger.importer_error(importer.name(), error);
        }

        let summary = PhaseSummary {
            name: importer.name().to_string(),
            imported: result.imported,
            skipped: result.skipped,
            errors: result.errors.len(),
            warnings: result.warnings.len(),
            duration_secs: started.elapsed().as_secs_f64(),
        };
        logger.importer_complete(&summary);
        phases.push(summary);
    }

    for (entity_type, count) in ctx.tracker.stats() {
        if count > 0 {
            tracing::debug!(entity_type = %entity_type, count, "Tracker entries");
        }
    }

    let summary = RunSummary { phases };
    logger.final_summary(&summary.phases);
    Ok(summary)
}
