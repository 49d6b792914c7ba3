//! Registry and run-loop tests.

mod support;

use std::fs;

use inventory_core::error::ImportError;
use inventory_importer::context::ImportContext;
use inventory_importer::logger::FileLogger;
use inventory_importer::runner::{self, RunOptions};

use support::{FixtureData, FixtureSource, RecordingStrategy};

fn write_seed_files(dir: &std::path::Path) {
    fs::write(
        dir.join("languages.json"),
        r#"[
            {"id": "eng", "internal_name": "English", "backward_compatibility": "mwnf3:languages:eng", "is_default": true},
            {"id": "fra", "internal_name": "French", "backward_compatibility": "mwnf3:languages:fra"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("countries.json"),
        r#"[
            {"id": "egy", "internal_name": "Egypt", "backward_compatibility": "mwnf3:countries:egy"}
        ]"#,
    )
    .unwrap();
}

fn fixture_data() -> FixtureData {
    let mut data = FixtureData::default();
    data.country_names = vec![support::country_name("eg", "en", "Egypt")];
    data.projects = vec![support::project("ISL")];
    data.project_names = vec![support::project_name("ISL", "en", "Discover Islamic Art")];
    data.museums = vec![support::museum("MUS01", "eg", "Museum of Islamic Art")];
    data.objects = vec![support::object_row(
        "ISL",
        "eg",
        "MUS01",
        "12",
        "en",
        Some("Lamp"),
        Some("A lamp."),
    )];
    data
}

#[tokio::test]
async fn full_run_covers_every_phase() {
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());
    let log_dir = tempfile::tempdir().unwrap();

    let importers = runner::build_importers(seed_dir.path()).unwrap();
    assert_eq!(importers.len(), 10);

    let strategy = RecordingStrategy::new();
    let mut ctx = ImportContext::new(
        Box::new(FixtureSource::new(fixture_data())),
        Box::new(strategy.clone()),
    );
    let mut logger = FileLogger::new(log_dir.path());

    let summary = runner::run(&importers, &mut ctx, &RunOptions::default(), &mut logger)
        .await
        .unwrap();

    assert_eq!(summary.phases.len(), 10);
    assert_eq!(summary.errors(), 0);
    // 2 languages + 1 country + 1 country translation + 1 context
    // + 1 project + 1 partner + 1 object = 8 imported entities.
    assert_eq!(summary.imported(), 8);

    assert_eq!(strategy.count("write_language"), 2);
    assert_eq!(strategy.count("write_country"), 1);
    assert_eq!(strategy.count("write_context"), 2); // default + project
    assert_eq!(strategy.count("write_partner"), 1);
    assert_eq!(strategy.count("write_item"), 1);

    let log = fs::read_to_string(logger.path()).unwrap();
    assert!(log.contains("PHASE: Languages"));
    assert!(log.contains("IMPORT SUMMARY"));
    assert!(log.contains("TOTALS: 8 imported"));
}

#[tokio::test]
async fn only_selects_a_single_importer() {
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());
    let log_dir = tempfile::tempdir().unwrap();

    let importers = runner::build_importers(seed_dir.path()).unwrap();
    let strategy = RecordingStrategy::new();
    let mut ctx = ImportContext::new(
        Box::new(FixtureSource::new(fixture_data())),
        Box::new(strategy.clone()),
    );
    let mut logger = FileLogger::new(log_dir.path());

    let options = RunOptions {
        only: Some("language".to_string()),
        ..RunOptions::default()
    };
    let summary = runner::run(&importers, &mut ctx, &options, &mut logger)
        .await
        .unwrap();

    assert_eq!(summary.phases.len(), 1);
    assert_eq!(strategy.count("write_language"), 2);
    assert_eq!(strategy.count("write_country"), 0);
}

#[tokio::test]
async fn start_at_skips_earlier_phases_and_missing_defaults_fail_soft() {
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());
    let log_dir = tempfile::tempdir().unwrap();

    let importers = runner::build_importers(seed_dir.path()).unwrap();
    let strategy = RecordingStrategy::new();
    let mut ctx = ImportContext::new(
        Box::new(FixtureSource::new(fixture_data())),
        Box::new(strategy.clone()),
    );
    let mut logger = FileLogger::new(log_dir.path());

    // Starting at projects without the language phase: the projects
    // importer fails with a configuration error, the loop continues.
    let options = RunOptions {
        start_at: Some("project".to_string()),
        ..RunOptions::default()
    };
    let summary = runner::run(&importers, &mut ctx, &options, &mut logger)
        .await
        .unwrap();

    assert_eq!(summary.phases.len(), 5);
    assert!(summary.errors() > 0);
    assert_eq!(strategy.count("write_language"), 0);

    let log = fs::read_to_string(logger.path()).unwrap();
    assert!(log.contains("language import must run first"));
}

#[tokio::test]
async fn unknown_range_key_is_an_error() {
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());
    let importers = runner::build_importers(seed_dir.path()).unwrap();

    let options = RunOptions {
        start_at: Some("glossary".to_string()),
        ..RunOptions::default()
    };
    let err = runner::should_run(&importers, 0, &options).unwrap_err();
    assert!(matches!(err, ImportError::UnknownImporter(key) if key == "glossary"));
}

#[tokio::test]
async fn stop_at_is_inclusive() {
    let seed_dir = tempfile::tempdir().unwrap();
    write_seed_files(seed_dir.path());
    let importers = runner::build_importers(seed_dir.path()).unwrap();

    let options = RunOptions {
        stop_at: Some("country".to_string()),
        ..RunOptions::default()
    };
    let selected: Vec<&str> = (0..importers.len())
        .filter(|&i| runner::should_run(&importers, i, &options).unwrap())
        .map(|i| importers[i].key())
        .collect();
    assert_eq!(
        selected,
        vec!["language", "language-translation", "country"]
    );
}
