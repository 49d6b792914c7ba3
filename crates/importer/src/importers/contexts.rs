//! Default-context importer.
//!
//! Creates the single context legacy data is imported under, marks it as
//! the default via the dedicated strategy call, and records its id in
//! tracker metadata for every later phase.

use async_trait::async_trait;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::ContextRecord;
use inventory_core::result::ImportResult;

use crate::context::{ImportContext, META_DEFAULT_CONTEXT};
use crate::importers::Importer;

/// Backward-compatibility key of the default import context.
pub const DEFAULT_CONTEXT_KEY: &str = "mwnf3:context:default";

pub struct DefaultContextImporter;

#[async_trait]
impl Importer for DefaultContextImporter {
    fn key(&self) -> &'static str {
        "context"
    }

    fn name(&self) -> &'static str {
        "Default Context"
    }

    fn description(&self) -> &'static str {
        "Create the default context for imported data"
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();

        // A previous run (or a resumed one) may already hold the context.
        if let Some(existing) = ctx
            .entity_uuid_or_lookup(DEFAULT_CONTEXT_KEY, EntityType::Context)
            .await?
        {
            ctx.tracker.set_metadata(META_DEFAULT_CONTEXT, existing);
            result.skipped += 1;
            ctx.mark_skipped();
            return Ok(result.finish());
        }

        if ctx.skip_writes() {
            let id = ctx.register_placeholder(DEFAULT_CONTEXT_KEY, EntityType::Context);
            ctx.tracker.set_metadata(META_DEFAULT_CONTEXT, id);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(result.finish());
        }

        let record = ContextRecord {
            internal_name: "legacy import".to_string(),
            backward_compatibility: DEFAULT_CONTEXT_KEY.to_string(),
        };

        let id = ctx.strategy.write_context(&record).await?;
        ctx.strategy.set_default_context(&id).await?;
        ctx.register(id.clone(), DEFAULT_CONTEXT_KEY, EntityType::Context);
        ctx.tracker.set_metadata(META_DEFAULT_CONTEXT, id);

        result.imported += 1;
        ctx.mark_progress();
        Ok(result.finish())
    }
}
