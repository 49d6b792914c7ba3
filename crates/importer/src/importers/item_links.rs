//! Item-to-item link importer.
//!
//! Reads the three legacy relationship tables (object-object,
//! object-monument, monument-monument) and writes `item_item_links`
//! rows. Both endpoints must already exist as items; a link with a
//! missing endpoint is a per-record error.

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::ItemItemLinkRecord;
use inventory_core::result::ImportResult;

use crate::context::ImportContext;
use crate::importers::contexts::DEFAULT_CONTEXT_KEY;
use crate::importers::Importer;

/// One legacy link row reduced to its endpoint item keys.
struct LinkRow {
    key: String,
    source_item_key: String,
    target_item_key: String,
}

pub struct ItemLinksImporter;

impl ItemLinksImporter {
    async fn import_links(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        links: Vec<LinkRow>,
        context_id: &str,
    ) -> Result<(), ImportError> {
        for link in links {
            if ctx.entity_exists(&link.key, EntityType::ItemItemLink) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            let source = ctx
                .entity_uuid_or_lookup(&link.source_item_key, EntityType::Item)
                .await?;
            let target = ctx
                .entity_uuid_or_lookup(&link.target_item_key, EntityType::Item)
                .await?;

            let (Some(source_id), Some(target_id)) = (source, target) else {
                result.record_error(format!(
                    "Link {}: endpoint items not found ({} -> {})",
                    link.key, link.source_item_key, link.target_item_key
                ));
                ctx.mark_error();
                continue;
            };

            if ctx.skip_writes() {
                ctx.register_placeholder(&link.key, EntityType::ItemItemLink);
                result.imported += 1;
                ctx.mark_progress();
                continue;
            }

            let record = ItemItemLinkRecord {
                source_id,
                target_id,
                context_id: context_id.to_string(),
                backward_compatibility: Some(link.key.clone()),
            };

            match ctx.strategy.write_item_link(&record).await {
                Ok(id) => {
                    ctx.register(id, &link.key, EntityType::ItemItemLink);
                    result.imported += 1;
                    ctx.mark_progress();
                }
                Err(err) => {
                    result.record_error(format!("Link {}: {err}", link.key));
                    ctx.mark_error();
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Importer for ItemLinksImporter {
    fn key(&self) -> &'static str {
        "item-link"
    }

    fn name(&self) -> &'static str {
        "Item Links"
    }

    fn description(&self) -> &'static str {
        "Import object/monument relationship links"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["object", "monument", "context"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();

        let context_id = ctx
            .entity_uuid_or_lookup(DEFAULT_CONTEXT_KEY, EntityType::Context)
            .await?
            .ok_or(ImportError::MissingDefault {
                what: "Default context",
                hint: "The default context import must run first.",
            })?;

        let object_object: Vec<LinkRow> = ctx
            .legacy
            .object_object_links()
            .await?
            .iter()
            .map(|row| LinkRow {
                key: backward_compatibility(
                    "mwnf3",
                    "objects_objects",
                    &[&row.id.to_string()],
                ),
                source_item_key: backward_compatibility(
                    "mwnf3",
                    "objects",
                    &[&row.o1_project_id, &row.o1_country_id, &row.o1_museum_id, &row.o1_number],
                ),
                target_item_key: backward_compatibility(
                    "mwnf3",
                    "objects",
                    &[&row.o2_project_id, &row.o2_country_id, &row.o2_museum_id, &row.o2_number],
                ),
            })
            .collect();

        let object_monument: Vec<LinkRow> = ctx
            .legacy
            .object_monument_links()
            .await?
            .iter()
            .map(|row| LinkRow {
                key: backward_compatibility(
                    "mwnf3",
                    "objects_monuments",
                    &[&row.id.to_string()],
                ),
                source_item_key: backward_compatibility(
                    "mwnf3",
                    "objects",
                    &[&row.o1_project_id, &row.o1_country_id, &row.o1_museum_id, &row.o1_number],
                ),
                target_item_key: backward_compatibility(
                    "mwnf3",
                    "monuments",
                    &[
                        &row.m1_project_id,
                        &row.m1_country_id,
                        &row.m1_institution_id,
                        &row.m1_number,
                    ],
                ),
            })
            .collect();

        let monument_monument: Vec<LinkRow> = ctx
            .legacy
            .monument_monument_links()
            .await?
            .iter()
            .map(|row| LinkRow {
                key: backward_compatibility(
                    "mwnf3",
                    "monuments_monuments",
                    &[&row.id.to_string()],
                ),
                source_item_key: backward_compatibility(
                    "mwnf3",
                    "monuments",
                    &[
                        &row.m1_project_id,
                        &row.m1_country_id,
                        &row.m1_institution_id,
                        &row.m1_number,
                    ],
                ),
                target_item_key: backward_compatibility(
                    "mwnf3",
                    "monuments",
                    &[
                        &row.m2_project_id,
                        &row.m2_country_id,
                        &row.m2_institution_id,
                        &row.m2_number,
                    ],
                ),
            })
            .collect();

        tracing::info!(
            object_object = object_object.len(),
            object_monument = object_monument.len(),
            monument_monument = monument_monument.len(),
            "Importing item links",
        );

        Self::import_links(ctx, &mut result, object_object, &context_id).await?;
        Self::import_links(ctx, &mut result, object_monument, &context_id).await?;
        Self::import_links(ctx, &mut result, monument_monument, &context_id).await?;

        Ok(result.finish())
    }
}
