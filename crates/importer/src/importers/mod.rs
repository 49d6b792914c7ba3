//! Per-entity importers.
//!
//! Each importer reads legacy rows, transforms and validates fields,
//! resolves foreign references via the tracker (with strategy fallback),
//! and writes through the strategy. A record either imports, is skipped
//! as a duplicate, or is recorded as an error; the importer then moves to
//! the next record. There is no retry.

use async_trait::async_trait;

use inventory_core::error::ImportError;
use inventory_core::result::ImportResult;

use crate::context::ImportContext;

pub mod contexts;
pub mod countries;
pub mod country_translations;
mod helpers;
pub mod item_links;
pub mod language_translations;
pub mod languages;
pub mod monuments;
pub mod objects;
pub mod partners;
pub mod projects;

/// One stage of the import pipeline.
#[async_trait]
pub trait Importer: Send + Sync {
    /// Stable key used by `--start-at` / `--stop-at` / `--only`.
    fn key(&self) -> &'static str;

    /// Human-readable name for logs and summaries.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Keys of importers whose data this one resolves (informational).
    fn dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError>;
}
