//! Sample collector: JSON-lines fixture capture.
//!
//! Appends one JSON object per collected sample to a fixture file for a
//! separate test-generation process. Dedup is by sha256 of the raw record.
//! Collection is best-effort and write-only: failures warn and the import
//! proceeds unaffected.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use inventory_core::sample::{Sample, SampleConfig, SampleReason, FOUNDATION_ENTITY_TYPES};

/// The on-disk shape of one collected sample.
#[derive(Debug, Serialize)]
struct SampleLine<'a> {
    entity_type: &'a str,
    source_db: &'a str,
    raw_data: &'a serde_json::Value,
    sample_reason: String,
    language: Option<&'a str>,
    collected_at: String,
    record_hash: &'a str,
}

pub struct SampleCollector {
    path: PathBuf,
    config: SampleConfig,
    /// Per-category set of record hashes already collected.
    collected: HashMap<String, HashSet<String>>,
    initialized: bool,
}

impl SampleCollector {
    pub fn new(path: impl Into<PathBuf>, config: SampleConfig) -> Self {
        Self {
            path: path.into(),
            config,
            collected: HashMap::new(),
            initialized: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Collect one sample; no-op when the category is already saturated or
    /// the record was seen before.
    pub fn collect(
        &mut self,
        entity_type: &str,
        raw_data: serde_json::Value,
        reason: SampleReason,
        details: Option<&str>,
        language: Option<&str>,
    ) {
        let sample = Sample {
            entity_type: entity_type.to_string(),
            source_db: "mwnf3".to_string(),
            raw_data,
            reason,
            details: details.map(str::to_string),
            language: language.map(str::to_string),
            collected_at: Utc::now(),
        };
        let category = sample.category();

        if !self.should_collect(&category, reason, entity_type) {
            return;
        }

        let serialized = sample.raw_data.to_string();
        let hash = format!("{:x}", Sha256::digest(serialized.as_bytes()));
        let seen = self.collected.entry(category).or_default();
        if !seen.insert(hash.clone()) {
            return;
        }

        let line = SampleLine {
            entity_type: &sample.entity_type,
            source_db: &sample.source_db,
            raw_data: &sample.raw_data,
            sample_reason: sample.full_reason(),
            language: sample.language.as_deref(),
            collected_at: sample.collected_at.to_rfc3339(),
            record_hash: &hash,
        };
        if let Err(err) = self.append(&line) {
            tracing::warn!(
                entity_type,
                path = %self.path.display(),
                error = %err,
                "Failed to collect sample",
            );
        }
    }

    fn should_collect(&self, category: &str, reason: SampleReason, entity_type: &str) -> bool {
        match reason {
            SampleReason::Warning => self.config.collect_all_warnings,
            SampleReason::Edge => self.config.collect_all_edge_cases,
            SampleReason::Foundation => {
                self.config.collect_all_foundation || FOUNDATION_ENTITY_TYPES.contains(&entity_type)
            }
            SampleReason::Success => {
                // Foundation data is exhaustive regardless of the reason tag.
                if self.config.collect_all_foundation
                    && FOUNDATION_ENTITY_TYPES.contains(&entity_type)
                {
                    return true;
                }
                self.collected
                    .get(category)
                    .map(|seen| seen.len() < self.config.sample_size)
                    .unwrap_or(true)
            }
        }
    }

    fn append(&mut self, line: &SampleLine<'_>) -> std::io::Result<()> {
        if !self.initialized {
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            self.initialized = true;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let json = serde_json::to_string(line)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(file, "{json}")
    }

    /// Per-category counts of collected samples.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        self.collected
            .iter()
            .map(|(category, seen)| (category.clone(), seen.len()))
            .collect()
    }
}
