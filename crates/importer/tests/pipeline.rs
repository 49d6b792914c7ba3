//! End-to-end pipeline tests over in-memory fakes of the legacy source
//! and the write strategy.

mod support;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::sample::SampleConfig;

use inventory_importer::context::{ImportContext, META_DEFAULT_LANGUAGE};
use inventory_importer::importers::contexts::{DefaultContextImporter, DEFAULT_CONTEXT_KEY};
use inventory_importer::importers::country_translations::CountryTranslationsImporter;
use inventory_importer::importers::item_links::ItemLinksImporter;
use inventory_importer::importers::language_translations::LanguageTranslationsImporter;
use inventory_importer::importers::languages::LanguagesImporter;
use inventory_importer::importers::objects::ObjectsImporter;
use inventory_importer::importers::projects::ProjectsImporter;
use inventory_importer::importers::Importer;
use inventory_importer::samples::SampleCollector;
use inventory_importer::seed::LanguageSeed;

use support::{FixtureData, FixtureSource, RecordingStrategy};

fn seeds() -> Vec<LanguageSeed> {
    vec![
        LanguageSeed {
            id: "eng".to_string(),
            internal_name: "English".to_string(),
            backward_compatibility: "mwnf3:languages:eng".to_string(),
            is_default: true,
        },
        LanguageSeed {
            id: "fra".to_string(),
            internal_name: "French".to_string(),
            backward_compatibility: "mwnf3:languages:fra".to_string(),
            is_default: false,
        },
        LanguageSeed {
            id: "ara".to_string(),
            internal_name: "Arabic".to_string(),
            backward_compatibility: "mwnf3:languages:ara".to_string(),
            is_default: false,
        },
    ]
}

fn context_with(
    data: FixtureData,
) -> (ImportContext, FixtureSource, RecordingStrategy) {
    let source = FixtureSource::new(data);
    let strategy = RecordingStrategy::new();
    let ctx = ImportContext::new(Box::new(source.clone()), Box::new(strategy.clone()));
    (ctx, source, strategy)
}

// -- Languages ----------------------------------------------------------------

#[tokio::test]
async fn languages_import_from_seed_without_reading_legacy() {
    let (mut ctx, source, strategy) = context_with(FixtureData::default());

    let result = LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();

    assert!(result.success);
    assert_eq!(result.imported, 3);
    assert_eq!(result.skipped, 0);
    assert!(result.errors.is_empty());
    assert_eq!(strategy.count("write_language"), 3);
    assert!(source.reads().is_empty());
}

#[tokio::test]
async fn language_store_payload_never_carries_default_flag() {
    let (mut ctx, _source, strategy) = context_with(FixtureData::default());

    LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();

    let payloads = strategy.payloads("write_language");
    let eng = payloads
        .iter()
        .find(|p| p["id"] == "eng")
        .expect("eng payload");
    let fields = eng.as_object().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(eng["internal_name"], "English");
    assert_eq!(eng["iso_code"], "eng");
    assert_eq!(eng["backward_compatibility"], "mwnf3:languages:eng");
    assert!(!fields.contains_key("is_default"));

    // Exactly one dedicated default-setting call, for the default language.
    let defaults = strategy.payloads("set_default_language");
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0]["id"], "eng");
    assert_eq!(ctx.tracker.metadata(META_DEFAULT_LANGUAGE), Some("eng"));
}

#[tokio::test]
async fn languages_register_in_tracker() {
    let (mut ctx, _source, _strategy) = context_with(FixtureData::default());

    LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();

    assert!(ctx.tracker.exists("mwnf3:languages:eng", EntityType::Language));
    assert_eq!(
        ctx.tracker.uuid_for("mwnf3:languages:fra", EntityType::Language),
        Some("fra")
    );
    assert_eq!(ctx.tracker.stats()[&EntityType::Language], 3);
}

#[tokio::test]
async fn second_run_skips_everything_and_keeps_uuids() {
    let (mut ctx, _source, strategy) = context_with(FixtureData::default());
    let importer = LanguagesImporter::new(seeds());

    let first = importer.run(&mut ctx).await.unwrap();
    assert_eq!(first.imported, 3);
    let uuid_before = ctx
        .tracker
        .uuid_for("mwnf3:languages:eng", EntityType::Language)
        .map(str::to_string);

    let second = importer.run(&mut ctx).await.unwrap();
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 3);
    assert_eq!(strategy.count("write_language"), 3);
    assert_eq!(
        ctx.tracker
            .uuid_for("mwnf3:languages:eng", EntityType::Language)
            .map(str::to_string),
        uuid_before,
    );
}

// -- Dry-run ------------------------------------------------------------------

#[tokio::test]
async fn dry_run_never_invokes_strategy_writes() {
    let mut data = FixtureData::default();
    data.language_names = vec![
        support::language_name("en", "fr", "Anglais"),
        support::language_name("fr", "en", "French"),
    ];
    let (mut ctx, _source, strategy) = context_with(data);
    ctx.dry_run = true;

    LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();
    let result = LanguageTranslationsImporter.run(&mut ctx).await.unwrap();

    assert_eq!(strategy.write_call_count(), 0);
    // Transformation logic still ran and the tracker is populated.
    assert_eq!(result.imported, 2);
    assert!(ctx.tracker.exists("mwnf3:languages:eng", EntityType::Language));
    assert!(ctx
        .tracker
        .exists("mwnf3:langnames:en:fr", EntityType::LanguageTranslation));
}

#[tokio::test]
async fn dry_run_still_collects_samples() {
    let dir = tempfile::tempdir().unwrap();
    let (mut ctx, _source, _strategy) = context_with(FixtureData::default());
    ctx.dry_run = true;
    ctx.samples = Some(SampleCollector::new(
        dir.path().join("samples.jsonl"),
        SampleConfig::default(),
    ));

    LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();

    let stats = ctx.samples.as_ref().unwrap().stats();
    assert_eq!(stats["language:foundation"], 3);
}

// -- Fallback lookups ---------------------------------------------------------

#[tokio::test]
async fn lookup_fallback_caches_into_tracker() {
    let (mut ctx, _source, strategy) = context_with(FixtureData::default());
    strategy.preload_lookup("contexts", DEFAULT_CONTEXT_KEY, "ctx-42");

    assert!(!ctx.tracker.exists(DEFAULT_CONTEXT_KEY, EntityType::Context));

    let found = ctx
        .entity_uuid_or_lookup(DEFAULT_CONTEXT_KEY, EntityType::Context)
        .await
        .unwrap();
    assert_eq!(found.as_deref(), Some("ctx-42"));

    // Cached: the tracker now answers and the strategy is not asked again.
    assert!(ctx.tracker.exists(DEFAULT_CONTEXT_KEY, EntityType::Context));
    let again = ctx
        .entity_uuid_or_lookup(DEFAULT_CONTEXT_KEY, EntityType::Context)
        .await
        .unwrap();
    assert_eq!(again.as_deref(), Some("ctx-42"));
    assert_eq!(strategy.count("lookup_find"), 1);
}

#[tokio::test]
async fn lookup_miss_returns_none_without_caching() {
    let (mut ctx, _source, strategy) = context_with(FixtureData::default());

    let found = ctx
        .entity_uuid_or_lookup("mwnf3:projects:isl", EntityType::Project)
        .await
        .unwrap();
    assert!(found.is_none());
    assert!(!ctx.tracker.exists("mwnf3:projects:isl", EntityType::Project));
    assert_eq!(strategy.count("lookup_find"), 1);
}

// -- Configuration errors -----------------------------------------------------

#[tokio::test]
async fn objects_require_default_language_first() {
    let (mut ctx, _source, _strategy) = context_with(FixtureData::default());

    let err = ObjectsImporter.run(&mut ctx).await.unwrap_err();
    assert!(matches!(err, ImportError::MissingDefault { .. }));
    assert!(err.to_string().contains("language import must run first"));
}

#[tokio::test]
async fn objects_require_default_context_first() {
    let (mut ctx, _source, _strategy) = context_with(FixtureData::default());
    ctx.tracker.set_metadata(META_DEFAULT_LANGUAGE, "eng");

    let err = ObjectsImporter.run(&mut ctx).await.unwrap_err();
    assert!(err
        .to_string()
        .contains("default context import must run first"));
}

// -- Country translations -----------------------------------------------------

#[tokio::test]
async fn duplicate_country_translation_is_skipped_not_overwritten() {
    let mut data = FixtureData::default();
    data.country_names = vec![
        support::country_name("eg", "en", "Egypt"),
        support::country_name("eg", "en", "Arab Republic of Egypt"),
        support::country_name("eg", "fr", "Egypte"),
    ];
    let (mut ctx, _source, strategy) = context_with(data);

    let result = CountryTranslationsImporter.run(&mut ctx).await.unwrap();

    assert!(result.success);
    assert_eq!(result.imported, 2);
    assert_eq!(result.skipped, 1);
    // Only the first (eg, en) row reached the strategy.
    let payloads = strategy.payloads("write_country_translation");
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0]["name"], "Egypt");
    assert_eq!(payloads[0]["country_id"], "egy");
    assert_eq!(payloads[0]["language_id"], "eng");
}

#[tokio::test]
async fn unknown_codes_are_per_record_errors() {
    let mut data = FixtureData::default();
    data.country_names = vec![
        support::country_name("zz", "en", "Atlantis"),
        support::country_name("eg", "xx", "Egypt"),
        support::country_name("eg", "en", "Egypt"),
    ];
    let (mut ctx, _source, strategy) = context_with(data);

    let result = CountryTranslationsImporter.run(&mut ctx).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.errors.len(), 2);
    // The valid row still imported: skip-and-report, not abort.
    assert_eq!(result.imported, 1);
    assert_eq!(strategy.count("write_country_translation"), 1);
}

// -- Projects -----------------------------------------------------------------

#[tokio::test]
async fn project_creates_context_collection_and_project() {
    let mut data = FixtureData::default();
    data.projects = vec![support::project("ISL")];
    data.project_names = vec![
        support::project_name("ISL", "en", "Discover Islamic Art"),
        support::project_name("ISL", "fr", "Decouvrir l'art islamique"),
    ];
    let (mut ctx, _source, strategy) = context_with(data);
    ctx.tracker.set_metadata(META_DEFAULT_LANGUAGE, "eng");

    let result = ProjectsImporter.run(&mut ctx).await.unwrap();

    assert!(result.success);
    assert_eq!(result.imported, 1);
    assert_eq!(strategy.count("write_context"), 1);
    assert_eq!(strategy.count("write_collection"), 1);
    assert_eq!(strategy.count("write_project"), 1);
    assert_eq!(strategy.count("write_project_translation"), 2);
    assert_eq!(strategy.count("write_collection_translation"), 2);

    // All three entities share the project key under their own types.
    for ty in [EntityType::Context, EntityType::Collection, EntityType::Project] {
        assert!(ctx.tracker.exists("mwnf3:projects:isl", ty), "{ty} missing");
    }

    let collection = &strategy.payloads("write_collection")[0];
    assert_eq!(collection["language_id"], "eng");
}

#[tokio::test]
async fn second_project_run_is_idempotent() {
    let mut data = FixtureData::default();
    data.projects = vec![support::project("ISL")];
    let (mut ctx, _source, strategy) = context_with(data);
    ctx.tracker.set_metadata(META_DEFAULT_LANGUAGE, "eng");

    ProjectsImporter.run(&mut ctx).await.unwrap();
    let second = ProjectsImporter.run(&mut ctx).await.unwrap();

    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(strategy.count("write_context"), 1);
}

// -- Objects ------------------------------------------------------------------

async fn prepared_object_context(
    data: FixtureData,
) -> (ImportContext, FixtureSource, RecordingStrategy) {
    let (mut ctx, source, strategy) = context_with(data);
    LanguagesImporter::new(seeds()).run(&mut ctx).await.unwrap();
    DefaultContextImporter.run(&mut ctx).await.unwrap();
    (ctx, source, strategy)
}

#[tokio::test]
async fn object_groups_language_rows_into_one_item() {
    let mut data = FixtureData::default();
    data.projects = vec![support::project("ISL")];
    data.museums = vec![support::museum("MUS01", "eg", "Museum of Islamic Art")];
    data.objects = vec![
        support::object_row("ISL", "eg", "MUS01", "12", "en", Some("Lamp"), Some("A lamp.")),
        support::object_row("ISL", "eg", "MUS01", "12", "fr", Some("Lampe"), Some("Une lampe.")),
    ];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    // Upstream phases for references.
    ProjectsImporter.run(&mut ctx).await.unwrap();
    inventory_importer::importers::partners::PartnersImporter
        .run(&mut ctx)
        .await
        .unwrap();

    let result = ObjectsImporter.run(&mut ctx).await.unwrap();

    assert!(result.success, "errors: {:?}", result.errors);
    assert_eq!(result.imported, 1);
    assert_eq!(strategy.count("write_item"), 1);
    assert_eq!(strategy.count("write_item_translation"), 2);
    assert_eq!(strategy.count("attach_items_to_collection"), 1);

    let item = &strategy.payloads("write_item")[0];
    assert_eq!(item["type"], "object");
    assert_eq!(item["internal_name"], "Lamp");
    assert_eq!(item["country_id"], "egy");
    assert_eq!(item["backward_compatibility"], "mwnf3:objects:isl:eg:mus01:12");
    assert!(item["partner_id"].is_string());
    assert!(item["collection_id"].is_string());

    assert!(ctx
        .tracker
        .exists("mwnf3:objects:isl:eg:mus01:12", EntityType::Item));
}

#[tokio::test]
async fn object_without_default_language_row_warns_and_uses_first() {
    let mut data = FixtureData::default();
    data.objects = vec![support::object_row(
        "ISL",
        "eg",
        "MUS01",
        "7",
        "fr",
        Some("Bassin"),
        Some("Un bassin."),
    )];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    let result = ObjectsImporter.run(&mut ctx).await.unwrap();

    assert!(result.success);
    assert_eq!(result.imported, 1);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("no translation in default language")));
    assert_eq!(strategy.payloads("write_item")[0]["internal_name"], "Bassin");
}

#[tokio::test]
async fn object_without_name_is_a_record_error() {
    let mut data = FixtureData::default();
    data.objects = vec![
        support::object_row("ISL", "eg", "MUS01", "7", "en", None, Some("No name.")),
        support::object_row("ISL", "eg", "MUS01", "8", "en", Some("Basin"), Some("Fine.")),
    ];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    let result = ObjectsImporter.run(&mut ctx).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("missing required field 'name'"));
    assert_eq!(result.imported, 1);
    assert_eq!(strategy.count("write_item"), 1);
}

#[tokio::test]
async fn object_tags_are_created_and_attached() {
    let mut data = FixtureData::default();
    let mut row =
        support::object_row("ISL", "eg", "MUS01", "12", "en", Some("Lamp"), Some("A lamp."));
    row.materials = Some("brass, silver".to_string());
    row.dynasty = Some("Mamluk".to_string());
    data.objects = vec![row];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    ObjectsImporter.run(&mut ctx).await.unwrap();

    assert_eq!(strategy.count("write_tag"), 3);
    let attaches = strategy.payloads("attach_tags_to_item");
    assert_eq!(attaches.len(), 1);
    assert_eq!(attaches[0]["tag_ids"].as_array().unwrap().len(), 3);
    assert!(ctx
        .tracker
        .exists("mwnf3:tags:material:brass", EntityType::Tag));
    assert!(ctx
        .tracker
        .exists("mwnf3:tags:dynasty:mamluk", EntityType::Tag));
}

#[tokio::test]
async fn shared_tags_are_created_once() {
    let mut data = FixtureData::default();
    let mut first =
        support::object_row("ISL", "eg", "MUS01", "1", "en", Some("Lamp"), Some("One."));
    first.materials = Some("brass".to_string());
    let mut second =
        support::object_row("ISL", "eg", "MUS01", "2", "en", Some("Basin"), Some("Two."));
    second.materials = Some("brass".to_string());
    data.objects = vec![first, second];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    ObjectsImporter.run(&mut ctx).await.unwrap();

    assert_eq!(strategy.count("write_tag"), 1);
    assert_eq!(strategy.count("attach_tags_to_item"), 2);
}

// -- Item links ---------------------------------------------------------------

#[tokio::test]
async fn item_links_resolve_endpoints_via_tracker() {
    let mut data = FixtureData::default();
    data.objects = vec![
        support::object_row("ISL", "eg", "MUS01", "1", "en", Some("Lamp"), Some("One.")),
        support::object_row("ISL", "eg", "MUS01", "2", "en", Some("Basin"), Some("Two.")),
    ];
    data.object_object_links = vec![support::object_object_link(5, "1", "2")];
    let (mut ctx, _source, strategy) = prepared_object_context(data).await;

    ObjectsImporter.run(&mut ctx).await.unwrap();
    let result = ItemLinksImporter.run(&mut ctx).await.unwrap();

    assert!(result.success, "errors: {:?}", result.errors);
    assert_eq!(result.imported, 1);
    let link = &strategy.payloads("write_item_link")[0];
    assert_eq!(
        link["backward_compatibility"],
        "mwnf3:objects_objects:5"
    );
    assert!(link["source_id"].is_string());
    assert!(link["target_id"].is_string());
}

#[tokio::test]
async fn item_link_with_missing_endpoint_is_a_record_error() {
    let mut data = FixtureData::default();
    data.objects = vec![support::object_row(
        "ISL", "eg", "MUS01", "1", "en", Some("Lamp"), Some("One."),
    )];
    data.object_object_links = vec![support::object_object_link(5, "1", "404")];
    let (mut ctx, _source, _strategy) = prepared_object_context(data).await;

    ObjectsImporter.run(&mut ctx).await.unwrap();
    let result = ItemLinksImporter.run(&mut ctx).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("endpoint items not found"));
}
