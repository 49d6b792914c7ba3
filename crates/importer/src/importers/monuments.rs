//! Monument importer.
//!
//! Same denormalized grouping as objects, keyed by (project, country,
//! institution, number). Monuments carry GPS coordinates when the legacy
//! row has them and attach keyword tags only.

use std::collections::HashMap;

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::{map_country_code, map_language_code};
use inventory_core::record::{ItemKind, ItemRecord, ItemTranslationRecord, TagRecord};
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;
use inventory_core::text::{parse_geo_coordinates, parse_tag_string, strip_html, truncate};
use inventory_core::types::EntityId;

use inventory_db::models::legacy::LegacyMonument;

use crate::context::ImportContext;
use crate::importers::helpers::get_or_create_tag;
use crate::importers::Importer;

struct MonumentGroup<'a> {
    project_id: &'a str,
    country: &'a str,
    institution_id: &'a str,
    number: &'a str,
    rows: Vec<&'a LegacyMonument>,
}

fn group_monuments(rows: &[LegacyMonument]) -> Vec<MonumentGroup<'_>> {
    let mut order: Vec<MonumentGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, &str, &str, &str), usize> = HashMap::new();

    for row in rows {
        let key = (
            row.project_id.as_str(),
            row.country.as_str(),
            row.institution_id.as_str(),
            row.number.as_str(),
        );
        match index.get(&key) {
            Some(&i) => order[i].rows.push(row),
            None => {
                index.insert(key, order.len());
                order.push(MonumentGroup {
                    project_id: &row.project_id,
                    country: &row.country,
                    institution_id: &row.institution_id,
                    number: &row.number,
                    rows: vec![row],
                });
            }
        }
    }
    order
}

fn select_base_row<'a>(
    group: &MonumentGroup<'a>,
    default_language: &str,
) -> (&'a LegacyMonument, bool) {
    let matched = group.rows.iter().copied().find(|row| {
        map_language_code(&row.lang)
            .map(|code| code == default_language)
            .unwrap_or(false)
    });
    match matched {
        Some(row) => (row, true),
        None => (group.rows[0], false),
    }
}

pub struct MonumentsImporter;

impl MonumentsImporter {
    async fn import_monument(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        group: &MonumentGroup<'_>,
        key: &str,
        default_language: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let (base, has_default_language) = select_base_row(group, default_language);
        if !has_default_language {
            result.record_warning(format!(
                "Monument {key} has no translation in default language {default_language}, \
                 using {} instead",
                base.lang
            ));
            ctx.collect_sample(
                "monument",
                base,
                SampleReason::Warning,
                Some("missing_default_translation"),
                Some(&base.lang),
            );
        }

        let internal_name = match base.name.as_deref().map(strip_html) {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(ImportError::MissingField {
                    field: "name",
                    record: format!("monument {key}"),
                })
            }
        };
        let country_id = map_country_code(group.country)?;

        ctx.collect_sample("monument", base, SampleReason::Success, None, Some(&base.lang));

        if ctx.skip_writes() {
            ctx.register_placeholder(key, EntityType::Item);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(());
        }

        let partner_key = backward_compatibility(
            "mwnf3",
            "institutions",
            &[group.institution_id, group.country],
        );
        let partner_id = ctx
            .entity_uuid_or_lookup(&partner_key, EntityType::Partner)
            .await?;

        let project_key = backward_compatibility("mwnf3", "projects", &[group.project_id]);
        let collection_id = ctx
            .entity_uuid_or_lookup(&project_key, EntityType::Collection)
            .await?;
        let project_id = ctx
            .entity_uuid_or_lookup(&project_key, EntityType::Project)
            .await?;

        let coordinates = base
            .geo_coordinates
            .as_deref()
            .and_then(parse_geo_coordinates);

        let item_id = ctx
            .strategy
            .write_item(&ItemRecord {
                kind: ItemKind::Monument,
                internal_name,
                backward_compatibility: key.to_string(),
                collection_id: collection_id.clone(),
                partner_id,
                country_id: Some(country_id.to_string()),
                project_id,
                parent_id: None,
                owner_reference: base.inventory_id.clone(),
                mwnf_reference: base.working_number.clone(),
                latitude: coordinates.map(|(lat, _)| lat),
                longitude: coordinates.map(|(_, lng)| lng),
            })
            .await?;
        ctx.register(item_id.clone(), key, EntityType::Item);

        if let Some(collection_id) = &collection_id {
            ctx.strategy
                .attach_items_to_collection(collection_id, &[item_id.clone()])
                .await?;
        }

        Self::attach_keyword_tags(ctx, result, base, &item_id).await;

        for &row in &group.rows {
            if let Err(err) =
                Self::write_translation(ctx, result, row, &item_id, key, default_context).await
            {
                result.record_warning(format!("{key}:{}: {err}", row.lang));
            }
        }

        result.imported += 1;
        ctx.mark_progress();
        Ok(())
    }

    async fn attach_keyword_tags(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        base: &LegacyMonument,
        item_id: &str,
    ) {
        let Some(keywords) = base.keywords.as_deref() else {
            return;
        };
        let language_id = match map_language_code(&base.lang) {
            Ok(code) => code.to_string(),
            Err(_) => return,
        };

        let mut tag_ids: Vec<EntityId> = Vec::new();
        for name in parse_tag_string(keywords) {
            let record = TagRecord {
                internal_name: name.clone(),
                backward_compatibility: backward_compatibility(
                    "mwnf3",
                    "tags",
                    &["keyword", &name],
                ),
                category: "keyword".to_string(),
                language_id: language_id.clone(),
            };
            match get_or_create_tag(ctx, &record).await {
                Ok(id) => tag_ids.push(id),
                Err(err) => result.record_warning(format!("tag '{name}': {err}")),
            }
        }

        if !tag_ids.is_empty() && !ctx.skip_writes() {
            if let Err(err) = ctx.strategy.attach_tags_to_item(item_id, &tag_ids).await {
                result.record_warning(format!("attach tags to {item_id}: {err}"));
            }
        }
    }

    async fn write_translation(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        row: &LegacyMonument,
        item_id: &str,
        key: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let language_id = map_language_code(&row.lang)?;

        let Some(name) = row.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
            result.record_warning(format!("{key}:{}: missing required name field", row.lang));
            return Ok(());
        };
        let Some(description) = row
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        else {
            return Ok(());
        };

        let alternate_name = match row.name2.as_deref() {
            Some(name2) => {
                let (value, truncated) = truncate(name2, 255);
                if truncated {
                    result.record_warning(format!(
                        "{key}:{}: alternate_name truncated to 255 chars",
                        row.lang
                    ));
                    ctx.collect_sample(
                        "monument",
                        row,
                        SampleReason::Edge,
                        Some("long_field"),
                        Some(&row.lang),
                    );
                }
                Some(value)
            }
            None => None,
        };

        let location_parts: Vec<&str> = [row.location.as_deref(), row.province.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let location = (!location_parts.is_empty()).then(|| location_parts.join(", "));

        ctx.strategy
            .write_item_translation(&ItemTranslationRecord {
                item_id: item_id.to_string(),
                language_id: language_id.to_string(),
                context_id: default_context.to_string(),
                backward_compatibility: key.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                alternate_name,
                kind: row.type_of.clone(),
                holder: None,
                owner: row.current_owner.clone(),
                initial_owner: row.original_owner.clone(),
                dates: row.date_description.clone(),
                location,
                dimensions: None,
                place_of_production: None,
                bibliography: row.bibliography.clone(),
                author_id: None,
                extra: None,
            })
            .await
    }
}

#[async_trait]
impl Importer for MonumentsImporter {
    fn key(&self) -> &'static str {
        "monument"
    }

    fn name(&self) -> &'static str {
        "Monuments"
    }

    fn description(&self) -> &'static str {
        "Import monument items with translations and GPS locations"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["project", "partner", "language", "context"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        let default_language = ctx.default_language_id()?;
        let default_context = ctx.default_context_id()?;

        let rows = ctx.legacy.monuments().await?;
        let groups = group_monuments(&rows);
        tracing::info!(
            monuments = groups.len(),
            language_rows = rows.len(),
            "Importing monuments",
        );

        for group in &groups {
            let key = backward_compatibility(
                "mwnf3",
                "monuments",
                &[
                    group.project_id,
                    group.country,
                    group.institution_id,
                    group.number,
                ],
            );

            if ctx.entity_exists(&key, EntityType::Item) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            if let Err(err) = Self::import_monument(
                ctx,
                &mut result,
                group,
                &key,
                &default_language,
                &default_context,
            )
            .await
            {
                result.record_error(format!("Monument {key}: {err}"));
                ctx.mark_error();
            }
        }

        Ok(result.finish())
    }
}
