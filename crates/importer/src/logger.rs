//! Per-run log file with structured markers.
//!
//! Console output goes through `tracing`; this logger additionally
//! appends timestamped lines to a log file created lazily on first write
//! (directory auto-created). File-write failures are reported once per
//! call via `tracing::warn!` and never abort the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;

/// Per-importer totals fed into the final summary.
#[derive(Debug, Clone)]
pub struct PhaseSummary {
    pub name: String,
    pub imported: usize,
    pub skipped: usize,
    pub errors: usize,
    pub warnings: usize,
    pub duration_secs: f64,
}

pub struct FileLogger {
    path: PathBuf,
    started: Instant,
    initialized: bool,
}

impl FileLogger {
    pub fn new(log_dir: &Path) -> Self {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
        Self {
            path: log_dir.join(format!("import-{timestamp}.log")),
            started: Instant::now(),
            initialized: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn ensure_initialized(&mut self) -> std::io::Result<()> {
        if self.initialized {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let header = format!(
            "{line}\nLEGACY IMPORT LOG\n{line}\nStart time: {start}\nLog file: {path}\n\n",
            line = "=".repeat(80),
            start = Utc::now().to_rfc3339(),
            path = self.path.display(),
        );
        fs::write(&self.path, header)?;
        self.initialized = true;
        Ok(())
    }

    /// Append one timestamped line; best-effort.
    fn write_line(&mut self, message: &str) {
        let result = self.ensure_initialized().and_then(|()| {
            let mut file = fs::OpenOptions::new().append(true).open(&self.path)?;
            writeln!(file, "[{}] {message}", Utc::now().to_rfc3339())
        });
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to write to log file");
        }
    }

    pub fn info(&mut self, message: &str) {
        tracing::info!("{message}");
        self.write_line(&format!("[INFO] {message}"));
    }

    pub fn warning(&mut self, message: &str) {
        tracing::warn!("{message}");
        self.write_line(&format!("[WARN] {message}"));
    }

    pub fn error(&mut self, context: &str, message: &str) {
        tracing::error!("{context}: {message}");
        self.write_line(&format!("[ERROR] {context}: {message}"));
    }

    // -- Structured markers -----------------------------------------------

    pub fn phase_start(&mut self, phase: &str) {
        tracing::info!(phase, "Starting phase");
        let line = "=".repeat(80);
        self.write_line(&format!("\n{line}\nPHASE: {phase}\n{line}"));
    }

    pub fn importer_start(&mut self, name: &str) {
        self.write_line(&format!("Starting {name}..."));
    }

    pub fn importer_complete(&mut self, summary: &PhaseSummary) {
        tracing::info!(
            importer = %summary.name,
            imported = summary.imported,
            skipped = summary.skipped,
            errors = summary.errors,
            duration_secs = format!("{:.2}", summary.duration_secs).as_str(),
            "Importer complete",
        );
        self.write_line(&format!(
            "Completed {}: {} imported, {} skipped, {} errors ({:.2}s)",
            summary.name, summary.imported, summary.skipped, summary.errors, summary.duration_secs,
        ));
    }

    pub fn importer_error(&mut self, name: &str, message: &str) {
        tracing::error!(importer = name, "{message}");
        self.write_line(&format!("ERROR in {name}: {message}"));
    }

    pub fn final_summary(&mut self, phases: &[PhaseSummary]) {
        let total_imported: usize = phases.iter().map(|p| p.imported).sum();
        let total_skipped: usize = phases.iter().map(|p| p.skipped).sum();
        let total_errors: usize = phases.iter().map(|p| p.errors).sum();
        let line = "=".repeat(80);

        let mut block = format!("\n{line}\nIMPORT SUMMARY\n{line}\n");
        for phase in phases {
            block.push_str(&format!(
                "{}:\n  Imported: {}, Skipped: {}, Errors: {}, Duration: {:.2}s\n",
                phase.name, phase.imported, phase.skipped, phase.errors, phase.duration_secs,
            ));
        }
        block.push_str(&format!(
            "\nTOTALS: {total_imported} imported, {total_skipped} skipped, {total_errors} errors\n\
             Total duration: {:.2}s\nEnd time: {}\n{line}",
            self.elapsed_secs(),
            Utc::now().to_rfc3339(),
        ));
        self.write_line(&block);

        tracing::info!(
            imported = total_imported,
            skipped = total_skipped,
            errors = total_errors,
            duration_secs = format!("{:.2}", self.elapsed_secs()).as_str(),
            log_file = %self.path.display(),
            "Import finished",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, imported: usize, errors: usize) -> PhaseSummary {
        PhaseSummary {
            name: name.to_string(),
            imported,
            skipped: 0,
            errors,
            warnings: 0,
            duration_secs: 0.5,
        }
    }

    #[test]
    fn log_file_is_created_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let logger = FileLogger::new(dir.path());
        assert!(!logger.path().exists());
    }

    #[test]
    fn writes_header_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = FileLogger::new(dir.path());
        logger.info("importing languages");
        logger.warning("duplicate country translation");

        let content = fs::read_to_string(logger.path()).unwrap();
        assert!(content.starts_with("="));
        assert!(content.contains("LEGACY IMPORT LOG"));
        assert!(content.contains("[INFO] importing languages"));
        assert!(content.contains("[WARN] duplicate country translation"));
    }

    #[test]
    fn creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs/nested");
        let mut logger = FileLogger::new(&nested);
        logger.info("hello");
        assert!(logger.path().exists());
    }

    #[test]
    fn final_summary_totals_phases() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = FileLogger::new(dir.path());
        logger.final_summary(&[summary("Languages", 3, 0), summary("Countries", 5, 2)]);

        let content = fs::read_to_string(logger.path()).unwrap();
        assert!(content.contains("TOTALS: 8 imported, 0 skipped, 2 errors"));
        assert!(content.contains("Languages:"));
        assert!(content.contains("Countries:"));
    }

    #[test]
    fn write_failures_never_panic() {
        // Point the logger at a path whose parent is a file, so directory
        // creation fails.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut logger = FileLogger::new(&blocker.join("logs"));
        logger.info("this only reaches the console");
    }
}
