//! Row models for the legacy `mwnf3` schema.
//!
//! Column names follow the legacy tables verbatim (including the odd
//! camelCase column); everything is read-only. The models derive
//! `Serialize` so raw rows can be captured as samples.

use serde::Serialize;
use sqlx::FromRow;

// ── Reference data ───────────────────────────────────────────────────

/// A row from `mwnf3.langnames`: the name of one language written in
/// another language.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyLanguageName {
    /// Legacy 2-letter code of the language being named.
    pub lang_id: String,
    /// Legacy 2-letter code of the language the name is written in.
    pub lang: String,
    pub name: String,
}

/// A row from `mwnf3.countrynames`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyCountryName {
    pub country_id: String,
    pub lang: String,
    pub name: String,
}

// ── Projects ─────────────────────────────────────────────────────────

/// A row from `mwnf3.projects`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyProject {
    pub project_id: String,
    pub launchdate: Option<chrono::NaiveDate>,
    pub active: Option<bool>,
}

/// A row from `mwnf3.projectnames`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyProjectName {
    pub project_id: String,
    pub lang: String,
    pub name: String,
    pub description: Option<String>,
}

// ── Partners ─────────────────────────────────────────────────────────

/// A row from `mwnf3.museums`. Keyed by (museum_id, country).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyMuseum {
    pub museum_id: String,
    pub country: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub project_id: Option<String>,
    #[sqlx(rename = "geoCoordinates")]
    #[serde(rename = "geoCoordinates")]
    pub geo_coordinates: Option<String>,
}

/// A row from `mwnf3.museumnames`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyMuseumName {
    pub museum_id: String,
    pub country: String,
    pub lang: String,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
}

/// A row from `mwnf3.institutions`. Keyed by (institution_id, country).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyInstitution {
    pub institution_id: String,
    pub country: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

/// A row from `mwnf3.institutionnames`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyInstitutionName {
    pub institution_id: String,
    pub country: String,
    pub lang: String,
    pub name: String,
    pub description: Option<String>,
}

// ── Items ────────────────────────────────────────────────────────────

/// A row from `mwnf3.objects`. Denormalized: one row per language, keyed
/// by (project_id, country, museum_id, number, lang).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyObject {
    pub project_id: String,
    pub country: String,
    pub museum_id: String,
    pub number: String,
    pub lang: String,
    pub working_number: Option<String>,
    pub inventory_id: Option<String>,
    pub name: Option<String>,
    pub name2: Option<String>,
    #[sqlx(rename = "typeof")]
    #[serde(rename = "typeof")]
    pub type_of: Option<String>,
    pub holding_museum: Option<String>,
    pub location: Option<String>,
    pub province: Option<String>,
    pub date_description: Option<String>,
    pub dynasty: Option<String>,
    pub current_owner: Option<String>,
    pub original_owner: Option<String>,
    pub dimensions: Option<String>,
    pub materials: Option<String>,
    pub artist: Option<String>,
    pub birthplace: Option<String>,
    pub deathplace: Option<String>,
    pub birthdate: Option<String>,
    pub deathdate: Option<String>,
    pub period_activity: Option<String>,
    pub production_place: Option<String>,
    pub description: Option<String>,
    pub bibliography: Option<String>,
    pub keywords: Option<String>,
    pub preparedby: Option<String>,
}

/// A row from `mwnf3.monuments`. Same denormalization as objects, keyed
/// by (project_id, country, institution_id, number, lang).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyMonument {
    pub project_id: String,
    pub country: String,
    pub institution_id: String,
    pub number: String,
    pub lang: String,
    pub working_number: Option<String>,
    pub inventory_id: Option<String>,
    pub name: Option<String>,
    pub name2: Option<String>,
    #[sqlx(rename = "typeof")]
    #[serde(rename = "typeof")]
    pub type_of: Option<String>,
    pub location: Option<String>,
    pub province: Option<String>,
    pub date_description: Option<String>,
    pub current_owner: Option<String>,
    pub original_owner: Option<String>,
    pub description: Option<String>,
    pub bibliography: Option<String>,
    pub keywords: Option<String>,
    pub preparedby: Option<String>,
    #[sqlx(rename = "geoCoordinates")]
    #[serde(rename = "geoCoordinates")]
    pub geo_coordinates: Option<String>,
}

// ── Item links ───────────────────────────────────────────────────────

/// A row from `mwnf3.objects_objects`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyObjectObjectLink {
    pub id: i64,
    pub o1_project_id: String,
    pub o1_country_id: String,
    pub o1_museum_id: String,
    pub o1_number: String,
    pub o2_project_id: String,
    pub o2_country_id: String,
    pub o2_museum_id: String,
    pub o2_number: String,
}

/// A row from `mwnf3.objects_monuments`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyObjectMonumentLink {
    pub id: i64,
    pub o1_project_id: String,
    pub o1_country_id: String,
    pub o1_museum_id: String,
    pub o1_number: String,
    pub m1_project_id: String,
    pub m1_country_id: String,
    pub m1_institution_id: String,
    pub m1_number: String,
}

/// A row from `mwnf3.monuments_monuments`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LegacyMonumentMonumentLink {
    pub id: i64,
    pub m1_project_id: String,
    pub m1_country_id: String,
    pub m1_institution_id: String,
    pub m1_number: String,
    pub m2_project_id: String,
    pub m2_country_id: String,
    pub m2_institution_id: String,
    pub m2_number: String,
}
