//! Partner importer: museums and institutions.
//!
//! Museums hold objects, institutions hold monuments; both become
//! partners distinguished by kind. Country references go through the
//! legacy code map; project references resolve via the tracker with
//! strategy fallback. Translation failures are warnings.

use std::collections::HashMap;

use async_trait::async_trait;

use inventory_core::compat::backward_compatibility;
use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::mappings::{map_country_code, map_language_code};
use inventory_core::record::{PartnerKind, PartnerRecord, PartnerTranslationRecord};
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;
use inventory_core::text::{parse_geo_coordinates, strip_html};

use inventory_db::models::legacy::{
    LegacyInstitution, LegacyInstitutionName, LegacyMuseum, LegacyMuseumName,
};

use crate::context::ImportContext;
use crate::importers::Importer;

pub struct PartnersImporter;

impl PartnersImporter {
    async fn import_museums(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let museums = ctx.legacy.museums().await?;
        let names = ctx.legacy.museum_names().await?;

        let mut names_by_museum: HashMap<(&str, &str), Vec<&LegacyMuseumName>> = HashMap::new();
        for name in &names {
            names_by_museum
                .entry((name.museum_id.as_str(), name.country.as_str()))
                .or_default()
                .push(name);
        }

        tracing::info!(count = museums.len(), "Importing museums");

        for museum in &museums {
            let row_key = format!("{}:{}", museum.museum_id, museum.country);
            let key = backward_compatibility(
                "mwnf3",
                "museums",
                &[&museum.museum_id, &museum.country],
            );

            if ctx.entity_exists(&key, EntityType::Partner) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            if let Err(err) = Self::import_museum(
                ctx,
                result,
                museum,
                names_by_museum
                    .get(&(museum.museum_id.as_str(), museum.country.as_str()))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
                &key,
                default_context,
            )
            .await
            {
                result.record_error(format!("Museum {row_key}: {err}"));
                ctx.mark_error();
            }
        }

        Ok(())
    }

    async fn import_museum(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        museum: &LegacyMuseum,
        translations: &[&LegacyMuseumName],
        key: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let country_id = map_country_code(&museum.country)?;
        ctx.collect_sample("museum", museum, SampleReason::Success, None, None);

        if ctx.skip_writes() {
            ctx.register_placeholder(key, EntityType::Partner);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(());
        }

        let project_id = match &museum.project_id {
            Some(pid) => {
                let project_key = backward_compatibility("mwnf3", "projects", &[pid]);
                ctx.entity_uuid_or_lookup(&project_key, EntityType::Project)
                    .await?
            }
            None => None,
        };

        let coordinates = museum
            .geo_coordinates
            .as_deref()
            .and_then(parse_geo_coordinates);

        let partner_id = ctx
            .strategy
            .write_partner(&PartnerRecord {
                kind: PartnerKind::Museum,
                internal_name: strip_html(&museum.name),
                backward_compatibility: key.to_string(),
                country_id: Some(country_id.to_string()),
                project_id,
                latitude: coordinates.map(|(lat, _)| lat),
                longitude: coordinates.map(|(_, lng)| lng),
            })
            .await?;
        ctx.register(partner_id.clone(), key, EntityType::Partner);

        for &translation in translations {
            if let Err(err) = Self::write_museum_translation(
                ctx,
                museum,
                translation,
                &partner_id,
                default_context,
            )
            .await
            {
                result.record_warning(format!(
                    "Museum {}:{}:{}: {err}",
                    museum.museum_id, museum.country, translation.lang
                ));
            }
        }

        result.imported += 1;
        ctx.mark_progress();
        Ok(())
    }

    async fn write_museum_translation(
        ctx: &mut ImportContext,
        museum: &LegacyMuseum,
        translation: &LegacyMuseumName,
        partner_id: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let language_id = map_language_code(&translation.lang)?;
        let key = backward_compatibility(
            "mwnf3",
            "museumnames",
            &[&translation.museum_id, &translation.country, &translation.lang],
        );
        ctx.strategy
            .write_partner_translation(&PartnerTranslationRecord {
                partner_id: partner_id.to_string(),
                language_id: language_id.to_string(),
                context_id: default_context.to_string(),
                backward_compatibility: key,
                name: strip_html(&translation.name),
                description: translation.description.clone(),
                city_display: translation.city.clone(),
                address: museum.address.clone(),
                contact_website: museum.url.clone(),
                contact_phone: museum.phone.clone(),
                contact_email: museum.email.clone(),
            })
            .await
    }

    async fn import_institutions(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let institutions = ctx.legacy.institutions().await?;
        let names = ctx.legacy.institution_names().await?;

        let mut names_by_institution: HashMap<(&str, &str), Vec<&LegacyInstitutionName>> =
            HashMap::new();
        for name in &names {
            names_by_institution
                .entry((name.institution_id.as_str(), name.country.as_str()))
                .or_default()
                .push(name);
        }

        tracing::info!(count = institutions.len(), "Importing institutions");

        for institution in &institutions {
            let row_key = format!("{}:{}", institution.institution_id, institution.country);
            let key = backward_compatibility(
                "mwnf3",
                "institutions",
                &[&institution.institution_id, &institution.country],
            );

            if ctx.entity_exists(&key, EntityType::Partner) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            if let Err(err) = Self::import_institution(
                ctx,
                result,
                institution,
                names_by_institution
                    .get(&(
                        institution.institution_id.as_str(),
                        institution.country.as_str(),
                    ))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]),
                &key,
                default_context,
            )
            .await
            {
                result.record_error(format!("Institution {row_key}: {err}"));
                ctx.mark_error();
            }
        }

        Ok(())
    }

    async fn import_institution(
        ctx: &mut ImportContext,
        result: &mut ImportResult,
        institution: &LegacyInstitution,
        translations: &[&LegacyInstitutionName],
        key: &str,
        default_context: &str,
    ) -> Result<(), ImportError> {
        let country_id = map_country_code(&institution.country)?;
        ctx.collect_sample("institution", institution, SampleReason::Success, None, None);

        if ctx.skip_writes() {
            ctx.register_placeholder(key, EntityType::Partner);
            result.imported += 1;
            ctx.mark_progress();
            return Ok(());
        }

        let partner_id = ctx
            .strategy
            .write_partner(&PartnerRecord {
                kind: PartnerKind::Institution,
                internal_name: strip_html(&institution.name),
                backward_compatibility: key.to_string(),
                country_id: Some(country_id.to_string()),
                project_id: None,
                latitude: None,
                longitude: None,
            })
            .await?;
        ctx.register(partner_id.clone(), key, EntityType::Partner);

        for translation in translations {
            let language_id = match map_language_code(&translation.lang) {
                Ok(code) => code,
                Err(err) => {
                    result.record_warning(format!(
                        "Institution {}:{}:{}: {err}",
                        institution.institution_id, institution.country, translation.lang
                    ));
                    continue;
                }
            };
            let translation_key = backward_compatibility(
                "mwnf3",
                "institutionnames",
                &[
                    &translation.institution_id,
                    &translation.country,
                    &translation.lang,
                ],
            );
            let write = ctx
                .strategy
                .write_partner_translation(&PartnerTranslationRecord {
                    partner_id: partner_id.clone(),
                    language_id: language_id.to_string(),
                    context_id: default_context.to_string(),
                    backward_compatibility: translation_key,
                    name: strip_html(&translation.name),
                    description: translation.description.clone(),
                    city_display: institution.city.clone(),
                    address: institution.address.clone(),
                    contact_website: institution.url.clone(),
                    contact_phone: institution.phone.clone(),
                    contact_email: institution.email.clone(),
                })
                .await;
            if let Err(err) = write {
                result.record_warning(format!(
                    "Institution {}:{}:{}: {err}",
                    institution.institution_id, institution.country, translation.lang
                ));
            }
        }

        result.imported += 1;
        ctx.mark_progress();
        Ok(())
    }
}

#[async_trait]
impl Importer for PartnersImporter {
    fn key(&self) -> &'static str {
        "partner"
    }

    fn name(&self) -> &'static str {
        "Partners"
    }

    fn description(&self) -> &'static str {
        "Import museums and institutions"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["project", "language", "country", "context"]
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        let default_context = ctx.default_context_id()?;

        Self::import_museums(ctx, &mut result, &default_context).await?;
        Self::import_institutions(ctx, &mut result, &default_context).await?;

        Ok(result.finish())
    }
}
