//! Per-importer result accumulation.

use serde::Serialize;

/// Outcome of one importer invocation. Created fresh per run, reported to
/// the orchestrator, never merged back into entity state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportResult {
    pub success: bool,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ImportResult {
    pub fn new() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Record a per-record error; the importer continues with the next
    /// record (skip-and-report, never abort-on-first-failure).
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Finalize: success means no errors were recorded.
    pub fn finish(mut self) -> Self {
        self.success = self.errors.is_empty();
        self
    }
}
