//! Sample capture types for test-fixture generation.
//!
//! During an import run, representative transformed records can be
//! captured and labeled for a downstream fixture-generation process.
//! Capture is write-only: it never affects import behavior.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Why a sample was considered interesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleReason {
    Success,
    Warning,
    Edge,
    Foundation,
}

impl SampleReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Edge => "edge",
            Self::Foundation => "foundation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "edge" => Some(Self::Edge),
            "foundation" => Some(Self::Foundation),
            _ => None,
        }
    }

    pub const ALL: &'static [&'static str] = &["success", "warning", "edge", "foundation"];
}

impl std::fmt::Display for SampleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A captured legacy record with its capture label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub entity_type: String,
    pub source_db: String,
    pub raw_data: serde_json::Value,
    pub reason: SampleReason,
    pub details: Option<String>,
    pub language: Option<String>,
    pub collected_at: Timestamp,
}

impl Sample {
    /// Full reason label, e.g. `warning:missing_name`.
    pub fn full_reason(&self) -> String {
        match &self.details {
            Some(details) => format!("{}:{}", self.reason, details),
            None => self.reason.to_string(),
        }
    }

    /// Collection category: entity type plus full reason.
    pub fn category(&self) -> String {
        format!("{}:{}", self.entity_type, self.full_reason())
    }
}

/// Collection policy knobs.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Per-category cap for success samples.
    pub sample_size: usize,
    pub collect_all_warnings: bool,
    pub collect_all_edge_cases: bool,
    /// Foundation data (languages, countries, and their translations) is
    /// collected exhaustively: downstream fixtures need the full set to
    /// satisfy dependencies.
    pub collect_all_foundation: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            collect_all_warnings: true,
            collect_all_edge_cases: true,
            collect_all_foundation: true,
        }
    }
}

/// Entity types whose samples are always collected under
/// `collect_all_foundation`.
pub const FOUNDATION_ENTITY_TYPES: &[&str] = &[
    "language",
    "language_translation",
    "country",
    "country_translation",
];
