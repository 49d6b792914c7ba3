//! `inventory-import` -- one-shot legacy data import tool.
//!
//! Reads the legacy `mwnf3` MySQL database and writes to the inventory
//! system through either direct SQL or the REST API, phase by phase.
//!
//! # Environment variables
//!
//! | Variable              | Required        | Description                              |
//! |-----------------------|-----------------|------------------------------------------|
//! | `LEGACY_DATABASE_URL` | yes             | MySQL URL of the legacy mwnf3 database   |
//! | `DATABASE_URL`        | sql strategy    | MySQL URL of the target database         |
//! | `API_BASE_URL`        | api strategy    | Base URL of the target application       |
//! | `API_TOKEN`           | no              | Bearer token for the API strategy        |
//! | `RUST_LOG`            | no              | Tracing filter (default `inventory=info`)|

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_db::legacy::LegacyDatabase;
use inventory_importer::context::ImportContext;
use inventory_importer::logger::FileLogger;
use inventory_importer::runner::{self, RunOptions};
use inventory_importer::samples::SampleCollector;
use inventory_importer::strategies::{ApiStrategy, SqlStrategy};
use inventory_importer::strategy::WriteStrategy;
use inventory_core::sample::SampleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Direct SQL inserts into the target database.
    Sql,
    /// Store requests against the target REST API.
    Api,
}

#[derive(Debug, Parser)]
#[command(name = "inventory-import", about = "Import legacy mwnf3 data into the inventory system")]
struct Args {
    /// Simulate the import without writing data.
    #[arg(long)]
    dry_run: bool,

    /// Start from this importer (inclusive).
    #[arg(long, value_name = "KEY")]
    start_at: Option<String>,

    /// Stop at this importer (inclusive).
    #[arg(long, value_name = "KEY")]
    stop_at: Option<String>,

    /// Run only this importer.
    #[arg(long, value_name = "KEY")]
    only: Option<String>,

    /// List available importers and exit.
    #[arg(long)]
    list_importers: bool,

    /// Persistence mechanism.
    #[arg(long, value_enum, default_value = "sql")]
    strategy: StrategyKind,

    /// Collect samples into this JSON-lines file.
    #[arg(long, value_name = "PATH")]
    samples: Option<PathBuf>,

    /// Collect samples without writing any data (implies sample capture).
    #[arg(long)]
    sample_only: bool,

    /// Directory for per-run log files.
    #[arg(long, value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Directory holding the languages/countries JSON seeds.
    #[arg(long, value_name = "DIR", default_value = "data")]
    seed_dir: PathBuf,
}

async fn build_strategy(args: &Args) -> anyhow::Result<Box<dyn WriteStrategy>> {
    match args.strategy {
        StrategyKind::Sql => {
            let url = std::env::var("DATABASE_URL")
                .context("DATABASE_URL is required for the sql strategy")?;
            let pool = inventory_db::create_pool(&url)
                .await
                .context("Failed to connect to the target database")?;
            tracing::info!("Target database connected");
            Ok(Box::new(SqlStrategy::new(pool)))
        }
        StrategyKind::Api => {
            let base_url = std::env::var("API_BASE_URL")
                .context("API_BASE_URL is required for the api strategy")?;
            let token = std::env::var("API_TOKEN").ok();
            tracing::info!(base_url = %base_url, "Using API strategy");
            Ok(Box::new(ApiStrategy::new(base_url, token)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let importers = runner::build_importers(&args.seed_dir)
        .context("Failed to load importer registry")?;

    if args.list_importers {
        println!("Available importers:\n");
        for (index, importer) in importers.iter().enumerate() {
            println!(
                "  {:>2}. {:<22} - {}",
                index + 1,
                importer.key(),
                importer.description(),
            );
        }
        println!("\nRange selection: --start-at <key>, --stop-at <key>, --only <key>");
        return Ok(());
    }

    let legacy_url = std::env::var("LEGACY_DATABASE_URL")
        .context("LEGACY_DATABASE_URL environment variable is required")?;
    let legacy = LegacyDatabase::connect(&legacy_url)
        .await
        .context("Failed to connect to the legacy database")?;
    tracing::info!("Legacy database connected");

    let strategy = build_strategy(&args).await?;

    let mut ctx = ImportContext::new(Box::new(legacy), strategy);
    ctx.dry_run = args.dry_run;
    ctx.sample_only = args.sample_only;
    if args.sample_only && args.samples.is_none() {
        bail!("--sample-only requires --samples <path>");
    }
    ctx.samples = args
        .samples
        .as_ref()
        .map(|path| SampleCollector::new(path, SampleConfig::default()));

    tracing::info!(
        dry_run = args.dry_run,
        sample_only = args.sample_only,
        strategy = ?args.strategy,
        "Starting legacy import",
    );

    let options = RunOptions {
        start_at: args.start_at.clone(),
        stop_at: args.stop_at.clone(),
        only: args.only.clone(),
    };
    let mut logger = FileLogger::new(&args.log_dir);

    let summary = runner::run(&importers, &mut ctx, &options, &mut logger).await?;

    if summary.errors() > 0 {
        std::process::exit(1);
    }
    Ok(())
}
