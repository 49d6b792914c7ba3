//! JSON seed files for reference data.
//!
//! Languages and countries are not read from the legacy database: the
//! canonical set ships with the tool as JSON seeds, curated to cover
//! every code the legacy data uses.

use std::path::Path;

use serde::{Deserialize, Serialize};

use inventory_core::error::ImportError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSeed {
    /// ISO 639-3 code, also the target primary key.
    pub id: String,
    pub internal_name: String,
    pub backward_compatibility: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySeed {
    /// ISO 3166-1 alpha-3 code, also the target primary key.
    pub id: String,
    pub internal_name: String,
    pub backward_compatibility: String,
}

pub fn load_language_seeds(seed_dir: &Path) -> Result<Vec<LanguageSeed>, ImportError> {
    let path = seed_dir.join("languages.json");
    let content = std::fs::read_to_string(&path)
        .map_err(|e| ImportError::io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(ImportError::seed)
}

pub fn load_country_seeds(seed_dir: &Path) -> Result<Vec<CountrySeed>, ImportError> {
    let path = seed_dir.join("countries.json");
    let content = std::fs::read_to_string(&path)
        .map_err(|e| ImportError::io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(ImportError::seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_language_seeds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("languages.json"),
            r#"[
                {"id": "eng", "internal_name": "English", "backward_compatibility": "mwnf3:languages:eng", "is_default": true},
                {"id": "fra", "internal_name": "French", "backward_compatibility": "mwnf3:languages:fra"}
            ]"#,
        )
        .unwrap();

        let seeds = load_language_seeds(dir.path()).unwrap();
        assert_eq!(seeds.len(), 2);
        assert!(seeds[0].is_default);
        assert!(!seeds[1].is_default);
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_country_seeds(dir.path()).unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[test]
    fn malformed_seed_file_is_a_seed_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("countries.json"), "{not json").unwrap();
        let err = load_country_seeds(dir.path()).unwrap_err();
        assert!(matches!(err, ImportError::Seed(_)));
    }
}
