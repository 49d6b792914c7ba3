//! Read contract for the legacy database.
//!
//! Importers never issue SQL themselves; they consume typed rows through
//! this capability set. The production implementation wraps the MySQL
//! pool in `inventory-db`; tests substitute an in-memory fixture source.

use async_trait::async_trait;

use inventory_core::error::ImportError;
use inventory_db::legacy::LegacyDatabase;
use inventory_db::models::legacy::{
    LegacyCountryName, LegacyInstitution, LegacyInstitutionName, LegacyLanguageName,
    LegacyMonument, LegacyMonumentMonumentLink, LegacyMuseum, LegacyMuseumName,
    LegacyObject, LegacyObjectMonumentLink, LegacyObjectObjectLink, LegacyProject,
    LegacyProjectName,
};

/// Read-only typed access to the legacy `mwnf3` schema, one method per
/// table the importers consume.
#[async_trait]
pub trait LegacySource: Send + Sync {
    async fn language_names(&self) -> Result<Vec<LegacyLanguageName>, ImportError>;
    async fn country_names(&self) -> Result<Vec<LegacyCountryName>, ImportError>;
    async fn projects(&self) -> Result<Vec<LegacyProject>, ImportError>;
    async fn project_names(&self) -> Result<Vec<LegacyProjectName>, ImportError>;
    async fn museums(&self) -> Result<Vec<LegacyMuseum>, ImportError>;
    async fn museum_names(&self) -> Result<Vec<LegacyMuseumName>, ImportError>;
    async fn institutions(&self) -> Result<Vec<LegacyInstitution>, ImportError>;
    async fn institution_names(&self) -> Result<Vec<LegacyInstitutionName>, ImportError>;
    async fn objects(&self) -> Result<Vec<LegacyObject>, ImportError>;
    async fn monuments(&self) -> Result<Vec<LegacyMonument>, ImportError>;
    async fn object_object_links(&self) -> Result<Vec<LegacyObjectObjectLink>, ImportError>;
    async fn object_monument_links(&self) -> Result<Vec<LegacyObjectMonumentLink>, ImportError>;
    async fn monument_monument_links(&self)
        -> Result<Vec<LegacyMonumentMonumentLink>, ImportError>;
}

#[async_trait]
impl LegacySource for LegacyDatabase {
    async fn language_names(&self) -> Result<Vec<LegacyLanguageName>, ImportError> {
        LegacyDatabase::language_names(self).await.map_err(ImportError::db)
    }

    async fn country_names(&self) -> Result<Vec<LegacyCountryName>, ImportError> {
        LegacyDatabase::country_names(self).await.map_err(ImportError::db)
    }

    async fn projects(&self) -> Result<Vec<LegacyProject>, ImportError> {
        LegacyDatabase::projects(self).await.map_err(ImportError::db)
    }

    async fn project_names(&self) -> Result<Vec<LegacyProjectName>, ImportError> {
        LegacyDatabase::project_names(self).await.map_err(ImportError::db)
    }

    async fn museums(&self) -> Result<Vec<LegacyMuseum>, ImportError> {
        LegacyDatabase::museums(self).await.map_err(ImportError::db)
    }

    async fn museum_names(&self) -> Result<Vec<LegacyMuseumName>, ImportError> {
        LegacyDatabase::museum_names(self).await.map_err(ImportError::db)
    }

    async fn institutions(&self) -> Result<Vec<LegacyInstitution>, ImportError> {
        LegacyDatabase::institutions(self).await.map_err(ImportError::db)
    }

    async fn institution_names(&self) -> Result<Vec<LegacyInstitutionName>, ImportError> {
        LegacyDatabase::institution_names(self).await.map_err(ImportError::db)
    }

    async fn objects(&self) -> Result<Vec<LegacyObject>, ImportError> {
        LegacyDatabase::objects(self).await.map_err(ImportError::db)
    }

    async fn monuments(&self) -> Result<Vec<LegacyMonument>, ImportError> {
        LegacyDatabase::monuments(self).await.map_err(ImportError::db)
    }

    async fn object_object_links(&self) -> Result<Vec<LegacyObjectObjectLink>, ImportError> {
        LegacyDatabase::object_object_links(self).await.map_err(ImportError::db)
    }

    async fn object_monument_links(&self) -> Result<Vec<LegacyObjectMonumentLink>, ImportError> {
        LegacyDatabase::object_monument_links(self).await.map_err(ImportError::db)
    }

    async fn monument_monument_links(
        &self,
    ) -> Result<Vec<LegacyMonumentMonumentLink>, ImportError> {
        LegacyDatabase::monument_monument_links(self).await.map_err(ImportError::db)
    }
}
