//! Project importer.
//!
//! Each legacy project becomes three entities: a Context (projects scope
//! their own content), a Collection in that context, and the Project
//! itself, all sharing the project's backward-compatibility key under
//! their own entity types. Translation failures are warnings, not record
//! errors.

use std::collections::HashMap;

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::map_language_code;
use inventory_core::record::{
    CollectionRecord, CollectionTranslationRecord, ContextRecord, ContextTranslationRecord,
    ProjectRecord, ProjectTranslationRecord,
};
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;

use inventory_db::models::legacy::{LegacyProject, LegacyProjectName};

use crate::context::ImportContext;
use crate::importers::Importer;

pub struct ProjectsImporter;

impl ProjectsImporter {
    async fn import_project(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        project: &LegacyProject,
        translations: &[&LegacyProjectName],
        default_language: &str,
    ) -> Result<(), ImportError> {
        let key = backward_compatibility("mwnf3", "projects", &[&project.project_id]);
        let internal_name = project.project_id.to_lowercase();

        ctx.collect_sample("project", project, SampleReason::Success, None, None);

        if ctx.skip_writes() {
            ctx.register_placeholder(&key, EntityType::Context);
            ctx.register_placeholder(&key, EntityType::Collection);
            ctx.register_placeholder(&key, EntityType::Project);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(());
        }

        let context_id = ctx
            .strategy
            .write_context(&ContextRecord {
                internal_name: internal_name.clone(),
                backward_compatibility: key.clone(),
            })
            .await?;
        ctx.register(context_id.clone(), &key, EntityType::Context);

        let collection_id = ctx
            .strategy
            .write_collection(&CollectionRecord {
                context_id: context_id.clone(),
                language_id: default_language.to_string(),
                internal_name: internal_name.clone(),
                backward_compatibility: key.clone(),
                parent_id: None,
                kind: None,
                latitude: None,
                longitude: None,
                country_id: None,
            })
            .await?;
        ctx.register(collection_id.clone(), &key, EntityType::Collection);

        let project_id = ctx
            .strategy
            .write_project(&ProjectRecord {
                context_id: context_id.clone(),
                language_id: default_language.to_string(),
                internal_name,
                backward_compatibility: key.clone(),
                launch_date: project.launchdate.map(|d| d.to_string()),
                is_launched: project.launchdate.is_some(),
                is_enabled: project.active.unwrap_or(false),
            })
            .await?;
        ctx.register(project_id.clone(), &key, EntityType::Project);

        for translation in translations {
            let language_id = match map_language_code(&translation.lang) {
                Ok(code) => code,
                Err(err) => {
                    result.record_warning(format!(
                        "{}:{}: {err}",
                        project.project_id, translation.lang
                    ));
                    continue;
                }
            };
            let translation_key = backward_compatibility(
                "mwnf3",
                "projectnames",
                &[&translation.project_id, &translation.lang],
            );

            let outcome = async {
                ctx.strategy
                    .write_context_translation(&ContextTranslationRecord {
                        context_id: context_id.clone(),
                        language_id: language_id.to_string(),
                        name: translation.name.clone(),
                        description: translation.description.clone(),
                    })
                    .await?;
                ctx.strategy
                    .write_collection_translation(&CollectionTranslationRecord {
                        collection_id: collection_id.clone(),
                        language_id: language_id.to_string(),
                        context_id: context_id.clone(),
                        backward_compatibility: translation_key.clone(),
                        title: translation.name.clone(),
                        description: translation.description.clone(),
                    })
                    .await?;
                ctx.strategy
                    .write_project_translation(&ProjectTranslationRecord {
                        project_id: project_id.clone(),
                        language_id: language_id.to_string(),
                        context_id: context_id.clone(),
                        name: translation.name.clone(),
                        description: translation.description.clone(),
                    })
                    .await
            }
            .await;

            if let Err(err) = outcome {
                result.record_warning(format!(
                    "{}:{}: {err}",
                    project.project_id, translation.lang
                ));
            }
        }

        result.imported += 1;
        ctx.mark_progress();
        Ok(())
    }
}

#[async_trait]
impl Importer for ProjectsImporter {
    fn key(&self) -> &'static str {
        "project"
    }

    fn name(&self) -> &'static str {
        "Projects"
    }

    fn description(&self) -> &'static str {
        "Import projects (creates Context, Collection, Project)"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["language"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        let default_language = ctx.default_language_id()?;

        let projects = ctx.legacy.projects().await?;
        let names = ctx.legacy.project_names().await?;

        let mut names_by_project: HashMap<&str, Vec<&LegacyProjectName>> = HashMap::new();
        for name in &names {
            names_by_project
                .entry(name.project_id.as_str())
                .or_default()
                .push(name);
        }

        tracing::info!(
            projects = projects.len(),
            translations = names.len(),
            "Importing projects",
        );

        for project in &projects {
            let key = backward_compatibility("mwnf3", "projects", &[&project.project_id]);
            if ctx.entity_exists(&key, EntityType::Context) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            let translations = names_by_project
                .get(project.project_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            if let Err(err) =
                Self::import_project(ctx, &mut result, project, translations, &default_language)
                    .await
            {
                result.record_error(format!("{}: {err}", project.project_id));
                ctx.mark_error();
            }
        }

        Ok(result.finish())
    }
}
