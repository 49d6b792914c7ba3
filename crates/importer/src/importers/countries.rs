//! Country reference-data importer, seeded from the bundled JSON file.

use async_trait::async_trait;

use inventory_core::entity::EntityType;
use inventory_core::error::ImportError;
use inventory_core::record::CountryRecord;
use inventory_core::result::ImportResult;
use inventory_core::sample::SampleReason;

use crate::context::ImportContext;
use crate::importers::Importer;
use crate::seed::CountrySeed;

pub struct CountriesImporter {
    seeds: Vec<CountrySeed>,
}

impl CountriesImporter {
    pub fn new(seeds: Vec<CountrySeed>) -> Self {
        Self { seeds }
    }
}

#[async_trait]
impl Importer for CountriesImporter {
    fn key(&self) -> &'static str {
        "country"
    }

    fn name(&self) -> &'static str {
        "Countries"
    }

    fn description(&self) -> &'static str {
        "Import country reference data from the JSON seed"
    }

    async fn run(&self, ctx: &mut ImportContext) -> Result<ImportResult, ImportError> {
        let mut result = ImportResult::new();
        tracing::info!(count = self.seeds.len(), "Importing countries");

        for seed in &self.seeds {
            let key = seed.backward_compatibility.as_str();

            if ctx.entity_exists(key, EntityType::Country) {
                result.skipped += 1;
                ctx.mark_skipped();
                continue;
            }

            ctx.collect_sample("country", seed, SampleReason::Foundation, None, None);

            if ctx.skip_writes() {
                ctx.register(seed.id.clone(), key, EntityType::Country);
                result.imported += 1;
                ctx.mark_progress();
                continue;
            }

            let record = CountryRecord {
                id: seed.id.clone(),
                internal_name: seed.internal_name.clone(),
                backward_compatibility: seed.backward_compatibility.clone(),
            };

            match ctx.strategy.write_country(&record).await {
                Ok(id) => {
                    ctx.register(id, key, EntityType::Country);
                    result.imported += 1;
                    ctx.mark_progress();
                }
                Err(err) => {
                    result.record_error(format!("{}: {err}", seed.id));
                    ctx.mark_error();
                }
            }
        }

        Ok(result.finish())
    }
}
