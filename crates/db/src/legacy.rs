//! Read-only queries against the legacy `mwnf3` schema.
//!
//! One method per table consumed by the importers, each with a stable
//! `ORDER BY` so runs are deterministic. The legacy database is never
//! written to.

use sqlx::MySqlPool;

use crate::models::legacy::{
    LegacyCountryName, LegacyInstitution, LegacyInstitutionName, LegacyLanguageName,
    LegacyMonument, LegacyMonumentMonumentLink, LegacyMuseum, LegacyMuseumName,
    LegacyObject, LegacyObjectMonumentLink, LegacyObjectObjectLink, LegacyProject,
    LegacyProjectName,
};

const OBJECT_COLUMNS: &str =
    "project_id, country, museum_id, number, lang, working_number, inventory_id, \
     name, name2, `typeof`, holding_museum, location, province, date_description, \
     dynasty, current_owner, original_owner, dimensions, materials, artist, \
     birthplace, deathplace, birthdate, deathdate, period_activity, \
     production_place, description, bibliography, keywords, preparedby";

const MONUMENT_COLUMNS: &str =
    "project_id, country, institution_id, number, lang, working_number, \
     inventory_id, name, name2, `typeof`, location, province, date_description, \
     current_owner, original_owner, description, bibliography, keywords, \
     preparedby, geoCoordinates";

/// Pool wrapper for the legacy database connection.
#[derive(Debug, Clone)]
pub struct LegacyDatabase {
    pool: MySqlPool,
}

impl LegacyDatabase {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Ok(Self::new(crate::create_pool(database_url).await?))
    }

    pub async fn language_names(&self) -> Result<Vec<LegacyLanguageName>, sqlx::Error> {
        sqlx::query_as("SELECT lang_id, lang, name FROM langnames ORDER BY lang_id, lang")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn country_names(&self) -> Result<Vec<LegacyCountryName>, sqlx::Error> {
        sqlx::query_as("SELECT country_id, lang, name FROM countrynames ORDER BY country_id, lang")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn projects(&self) -> Result<Vec<LegacyProject>, sqlx::Error> {
        sqlx::query_as("SELECT project_id, launchdate, active FROM projects ORDER BY project_id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn project_names(&self) -> Result<Vec<LegacyProjectName>, sqlx::Error> {
        sqlx::query_as(
            "SELECT project_id, lang, name, description FROM projectnames ORDER BY project_id, lang",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn museums(&self) -> Result<Vec<LegacyMuseum>, sqlx::Error> {
        sqlx::query_as(
            "SELECT museum_id, country, name, city, address, phone, email, url, \
                    project_id, geoCoordinates \
             FROM museums ORDER BY museum_id, country",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn museum_names(&self) -> Result<Vec<LegacyMuseumName>, sqlx::Error> {
        sqlx::query_as(
            "SELECT museum_id, country, lang, name, city, description \
             FROM museumnames ORDER BY museum_id, country, lang",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn institutions(&self) -> Result<Vec<LegacyInstitution>, sqlx::Error> {
        sqlx::query_as(
            "SELECT institution_id, country, name, city, address, phone, email, url \
             FROM institutions ORDER BY institution_id, country",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn institution_names(&self) -> Result<Vec<LegacyInstitutionName>, sqlx::Error> {
        sqlx::query_as(
            "SELECT institution_id, country, lang, name, description \
             FROM institutionnames ORDER BY institution_id, country, lang",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn objects(&self) -> Result<Vec<LegacyObject>, sqlx::Error> {
        let sql = format!(
            "SELECT {OBJECT_COLUMNS} FROM objects ORDER BY project_id, country, museum_id, number, lang"
        );
        sqlx::query_as(&sql).fetch_all(&self.pool).await
    }

    pub async fn monuments(&self) -> Result<Vec<LegacyMonument>, sqlx::Error> {
        let sql = format!(
            "SELECT {MONUMENT_COLUMNS} FROM monuments ORDER BY project_id, country, institution_id, number, lang"
        );
        sqlx::query_as(&sql).fetch_all(&self.pool).await
    }

    pub async fn object_object_links(&self) -> Result<Vec<LegacyObjectObjectLink>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, o1_project_id, o1_country_id, o1_museum_id, o1_number, \
                    o2_project_id, o2_country_id, o2_museum_id, o2_number \
             FROM objects_objects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn object_monument_links(
        &self,
    ) -> Result<Vec<LegacyObjectMonumentLink>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, o1_project_id, o1_country_id, o1_museum_id, o1_number, \
                    m1_project_id, m1_country_id, m1_institution_id, m1_number \
             FROM objects_monuments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn monument_monument_links(
        &self,
    ) -> Result<Vec<LegacyMonumentMonumentLink>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, m1_project_id, m1_country_id, m1_institution_id, m1_number, \
                    m2_project_id, m2_country_id, m2_institution_id, m2_number \
             FROM monuments_monuments ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }
}
