//! Object importer.
//!
//! Legacy objects are denormalized: one row per language, keyed by
//! (project, country, museum, number). Rows group into one item plus one
//! translation per language. The default-language row supplies the
//! internal name; a group without one falls back to its first row with a
//! warning. Tags, artists, and authors are created on first mention and
//! attached to the item.

use std::collections::HashMap;

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::{map_country_code, map_language_code};
use inventory_core::record::{
    ArtistRecord, AuthorRecord, ItemKind, ItemRecord, ItemTranslationRecord, TagRecord,
};
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;
use inventory_core::text::{parse_tag_string, split_names, strip_html, truncate};
use inventory_core::types::EntityId;

use inventory_db::models::legacy::LegacyObject;

use crate::context::ImportContext;
use crate::importers::helpers::{get_or_create_artist, get_or_create_author, get_or_create_tag};
use crate::importers::Importer;

/// One legacy object with all of its language rows.
struct ObjectGroup<'a> {
    project_id: &'a str,
    country: &'a str,
    museum_id: &'a str,
    number: &'a str,
    rows: Vec<&'a LegacyObject>,
}

/// Group denormalized rows by their non-language primary-key columns,
/// preserving first-seen order.
fn group_objects(rows: &[LegacyObject]) -> Vec<ObjectGroup<'_>> {
    let mut order: Vec<ObjectGroup<'_>> = Vec::new();
    let mut index: HashMap<(&str, &str, &str, &str), usize> = HashMap::new();

    for row in rows {
        let key = (
            row.project_id.as_str(),
            row.country.as_str(),
            row.museum_id.as_str(),
            row.number.as_str(),
        );
        match index.get(&key) {
            Some(&i) => order[i].rows.push(row),
            None => {
                index.insert(key, order.len());
                order.push(ObjectGroup {
                    project_id: &row.project_id,
                    country: &row.country,
                    museum_id: &row.museum_id,
                    number: &row.number,
                    rows: vec![row],
                });
            }
        }
    }
    order
}

/// Pick the row whose language matches the default, or fall back to the
/// first row.
fn select_base_row<'a>(group: &ObjectGroup<'a>, default_language: &str) -> (&'a LegacyObject, bool) {
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

pub struct ObjectsImporter;

impl ObjectsImporter {
    async fn import_object(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        group: &ObjectGroup<'_>,
        key: &str,
        default_language: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let (base, has_default_language) = select_base_row(group, default_language);
        if !has_default_language {
            result.record_warning(format!(
                "Object {key} has no translation in default language {default_language}, \
                 using {} instead",
                base.lang
            ));
            ctx.collect_sample(
                "object",
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
                    record: format!("object {key}"),
                })
            }
        };
        let country_id = map_country_code(group.country)?;

        ctx.collect_sample("object", base, SampleReason::Success, None, Some(&base.lang));

        if ctx.skip_writes() {
            ctx.register_placeholder(key, EntityType::Item);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(());
        }

        let partner_key =
            backward_compatibility("mwnf3", "museums", &[group.museum_id, group.country]);
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

        let item_id = ctx
            .strategy
            .write_item(&ItemRecord {
                kind: ItemKind::Object,
                internal_name,
                backward_compatibility: key.to_string(),
                collection_id: collection_id.clone(),
                partner_id,
                country_id: Some(country_id.to_string()),
                project_id,
                parent_id: None,
                owner_reference: base.inventory_id.clone(),
                mwnf_reference: base.working_number.clone(),
                latitude: None,
                longitude: None,
            })
            .await?;
        ctx.register(item_id.clone(), key, EntityType::Item);

        if let Some(collection_id) = &collection_id {
            ctx.strategy
                .attach_items_to_collection(collection_id, &[item_id.clone()])
                .await?;
        }

        Self::attach_tags(ctx, result, base, &item_id).await;
        Self::attach_artists(ctx, result, base, &item_id).await;

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

    /// Create and attach material/dynasty/keyword tags from the base row.
    /// Tag failures are warnings; the item stands without them.
    async fn attach_tags(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        base: &LegacyObject,
        item_id: &str,
    ) {
        let language_id = match map_language_code(&base.lang) {
            Ok(code) => code.to_string(),
            Err(_) => return,
        };

        let sources = [
            ("material", base.materials.as_deref()),
            ("dynasty", base.dynasty.as_deref()),
            ("keyword", base.keywords.as_deref()),
        ];

        let mut tag_ids: Vec<EntityId> = Vec::new();
        for (category, value) in sources {
            let Some(value) = value else { continue };
            for name in parse_tag_string(value) {
                let record = TagRecord {
                    internal_name: name.clone(),
                    backward_compatibility: backward_compatibility(
                        "mwnf3",
                        "tags",
                        &[category, &name],
                    ),
                    category: category.to_string(),
                    language_id: language_id.clone(),
                };
                match get_or_create_tag(ctx, &record).await {
                    Ok(id) => tag_ids.push(id),
                    Err(err) => result.record_warning(format!("tag '{name}': {err}")),
                }
            }
        }

        if !tag_ids.is_empty() && !ctx.skip_writes() {
            if let Err(err) = ctx.strategy.attach_tags_to_item(item_id, &tag_ids).await {
                result.record_warning(format!("attach tags to {item_id}: {err}"));
            }
        }
    }

    /// Create and attach artists named on the base row.
    async fn attach_artists(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        base: &LegacyObject,
        item_id: &str,
    ) {
        let Some(artist_field) = base.artist.as_deref() else {
            return;
        };

        let mut artist_ids: Vec<EntityId> = Vec::new();
        for name in split_names(artist_field) {
            let record = ArtistRecord {
                name: name.clone(),
                internal_name: name.clone(),
                backward_compatibility: backward_compatibility("mwnf3", "artists", &[&name]),
                place_of_birth: base.birthplace.clone(),
                place_of_death: base.deathplace.clone(),
                date_of_birth: base.birthdate.clone(),
                date_of_death: base.deathdate.clone(),
                period_of_activity: base.period_activity.clone(),
            };
            match get_or_create_artist(ctx, &record).await {
                Ok(id) => artist_ids.push(id),
                Err(err) => result.record_warning(format!("artist '{name}': {err}")),
            }
        }

        if !artist_ids.is_empty() && !ctx.skip_writes() {
            if let Err(err) = ctx
                .strategy
                .attach_artists_to_item(item_id, &artist_ids)
                .await
            {
                result.record_warning(format!("attach artists to {item_id}: {err}"));
            }
        }
    }

    async fn write_translation(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        row: &LegacyObject,
        item_id: &str,
        key: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let language_id = map_language_code(&row.lang)?;

        let Some(name) = row.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
            result.record_warning(format!("{key}:{}: missing required name field", row.lang));
            return Ok(());
        };
        // A row without a description carries nothing worth a translation.
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
                        "object",
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

        let author_id = match row.preparedby.as_deref().map(str::trim) {
            Some(author_name) if !author_name.is_empty() => {
                let record = AuthorRecord {
                    name: author_name.to_string(),
                    internal_name: author_name.to_string(),
                    backward_compatibility: backward_compatibility(
                        "mwnf3",
                        "authors",
                        &[author_name],
                    ),
                };
                Some(get_or_create_author(ctx, &record).await?)
            }
            _ => None,
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
                holder: row.holding_museum.clone(),
                owner: row.current_owner.clone(),
                initial_owner: row.original_owner.clone(),
                dates: row.date_description.clone(),
                location,
                dimensions: row.dimensions.clone(),
                place_of_production: row.production_place.clone(),
                bibliography: row.bibliography.clone(),
                author_id,
                extra: None,
            })
            .await
    }
}

#[async_trait]
impl Importer for ObjectsImporter {
    fn key(&self) -> &'static str {
        "object"
    }

    fn name(&self) -> &'static str {
        "Objects"
    }

    fn description(&self) -> &'static str {
        "Import object items with translations, tags, and artists"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["project", "partner", "language", "context"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        let default_language = ctx.default_language_id()?;
        let default_context = ctx.default_context_id()?;

        let rows = ctx.legacy.objects().await?;
        let groups = group_objects(&rows);
        tracing::info!(
            objects = groups.len(),
            language_rows = rows.len(),
            "Importing objects",
        );

        for group in &groups {
            let key = backward_compatibility(
                "mwnf3",
                "objects",
                &[group.project_id, group.country, group.museum_id, group.number],
            );

            if ctx.entity_exists(&key, EntityType::Item) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            if let Err(err) = Self::import_object(
                ctx,
                &mut result,
                group,
                &key,
                &default_language,
                &default_context,
            )
            .await
            {
                result.record_error(format!("Object {key}: {err}"));
                ctx.mark_error();
            }
        }

        Ok(result.finish())
    }
}
