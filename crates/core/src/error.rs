//! Shared error enum for the import pipeline.
//!
//! Transport errors (database, HTTP) are carried as strings so this crate
//! stays free of driver dependencies; the importer crate converts at the
//! call site via the constructor helpers.

use thiserror::Error;

/// Errors raised by importers, strategies, and supporting components.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A required cross-phase default is missing from tracker metadata.
    /// Fatal for the importer: phase ordering was violated.
    #[error("{what} not found in tracker. {hint}")]
    MissingDefault {
        what: &'static str,
        hint: &'static str,
    },

    /// A legacy language code with no entry in the code map.
    #[error("unknown legacy language code '{0}'")]
    UnknownLanguageCode(String),

    /// A legacy country code with no entry in the code map.
    #[error("unknown legacy country code '{0}'")]
    UnknownCountryCode(String),

    /// A cross-entity reference that could not be resolved via the tracker
    /// or the strategy fallback lookup.
    #[error("unresolved {entity} reference '{key}'")]
    UnresolvedReference { entity: &'static str, key: String },

    /// A legacy record missing a field the target schema requires.
    #[error("missing required field '{field}' for {record}")]
    MissingField {
        field: &'static str,
        record: String,
    },

    /// A `--start-at`/`--stop-at`/`--only` key that matches no importer.
    #[error("unknown importer '{0}'")]
    UnknownImporter(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("seed file error: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ImportError {
    pub fn db(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    pub fn http(err: impl std::fmt::Display) -> Self {
        Self::Http(err.to_string())
    }

    pub fn seed(err: impl std::fmt::Display) -> Self {
        Self::Seed(err.to_string())
    }

    pub fn io(err: impl std::fmt::Display) -> Self {
        Self::Io(err.to_string())
    }
}
