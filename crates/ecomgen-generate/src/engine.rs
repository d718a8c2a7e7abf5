use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use ecomgen_core::{
    Customer, Dataset, ITEMS_PER_ORDER, Order, OrderItem, Product, Record, Review, validate_ids,
    validate_order_items, validate_orders, validate_reviews,
};

use crate::errors::GenerationError;
use crate::faker_rs::FakeRsAdapter;
use crate::generators::{
    GeneratorContext, generate_customers, generate_order_items, generate_orders,
    generate_products, generate_reviews,
};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_records_csv;

pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Runs the customers -> products -> orders -> order items -> reviews pipeline.
///
/// Each stage is generated in memory, written to its own file, and then
/// passed to the later stages. A failing stage aborts the run and leaves the
/// files of earlier stages on disk.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let options = &self.options;
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        let reference_date = options
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        check_options(options)?;
        let faker = FakeRsAdapter::new(&options.locales)?;
        std::fs::create_dir_all(&options.out_dir)?;

        let mut report =
            GenerationReport::new(run_id.clone(), seed, reference_date, options.locales.clone());

        info!(
            run_id = %run_id,
            seed,
            reference_date = %reference_date,
            out_dir = %options.out_dir.display(),
            "generation started"
        );

        match self.generate(&faker, seed, reference_date, &mut report) {
            Ok(dataset) => {
                report.duration_ms = start.elapsed().as_millis() as u64;
                if options.write_report {
                    let report_path = options.out_dir.join(REPORT_FILE);
                    std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
                }
                info!(
                    run_id = %run_id,
                    tables = report.tables.len(),
                    rows_total = report.rows_total,
                    bytes_written = report.bytes_written,
                    duration_ms = report.duration_ms,
                    "generation completed"
                );
                Ok(GenerationResult {
                    out_dir: options.out_dir.clone(),
                    dataset,
                    report,
                })
            }
            Err(err) => {
                warn!(
                    run_id = %run_id,
                    tables_written = report.tables.len(),
                    error = %err,
                    "generation failed"
                );
                Err(err)
            }
        }
    }

    fn generate(
        &self,
        faker: &FakeRsAdapter,
        seed: u64,
        reference_date: NaiveDate,
        report: &mut GenerationReport,
    ) -> Result<Dataset, GenerationError> {
        let options = &self.options;
        let ctx = GeneratorContext::new(faker, reference_date);
        let mut dataset = Dataset::default();

        let mut stage = Stage::start::<Customer>(seed, options.customers as u64);
        dataset.customers = generate_customers(&ctx, options.customers, &mut stage.rng);
        if options.validate {
            validate_ids(&dataset.customers)?;
        }
        self.finish(stage, &dataset.customers, report)?;

        let mut stage = Stage::start::<Product>(seed, options.products as u64);
        dataset.products = generate_products(&ctx, options.products, &mut stage.rng);
        if options.validate {
            validate_ids(&dataset.products)?;
        }
        self.finish(stage, &dataset.products, report)?;

        let mut stage = Stage::start::<Order>(seed, options.orders as u64);
        dataset.orders = generate_orders(
            &ctx,
            &dataset.customers,
            &dataset.products,
            options.orders,
            &mut stage.rng,
        )?;
        if options.validate {
            validate_orders(&dataset.orders, &dataset.customers)?;
        }
        self.finish(stage, &dataset.orders, report)?;

        let estimate = (dataset.orders.len() as f64 * options.avg_items_per_order) as u64;
        let mut stage = Stage::start::<OrderItem>(seed, estimate);
        dataset.order_items = generate_order_items(
            &dataset.orders,
            &dataset.products,
            options.avg_items_per_order,
            &mut stage.rng,
        )?;
        if options.validate {
            validate_order_items(&dataset.order_items, &dataset.orders, &dataset.products)?;
        }
        self.finish(stage, &dataset.order_items, report)?;

        let mut stage = Stage::start::<Review>(seed, options.reviews as u64);
        dataset.reviews = generate_reviews(
            &ctx,
            &dataset.customers,
            &dataset.products,
            &dataset.orders,
            options.reviews,
            &mut stage.rng,
        )?;
        if options.validate {
            validate_reviews(&dataset.reviews, &dataset.customers, &dataset.products)?;
        }
        self.finish(stage, &dataset.reviews, report)?;

        Ok(dataset)
    }

    fn finish<R: Record>(
        &self,
        stage: Stage,
        records: &[R],
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let path = self.options.out_dir.join(R::file_name());
        let bytes_written = write_records_csv(&path, records)?;
        let duration_ms = stage.started.elapsed().as_millis() as u64;

        info!(
            table = R::TABLE,
            rows_generated = records.len(),
            bytes_written,
            duration_ms,
            path = %path.display(),
            "table generated"
        );

        report.record_table(TableReport {
            table: R::TABLE.to_string(),
            path,
            rows_requested: stage.rows_requested,
            rows_generated: records.len() as u64,
            bytes_written,
            duration_ms,
        });
        Ok(())
    }
}

struct Stage {
    rows_requested: u64,
    started: Instant,
    rng: ChaCha8Rng,
}

impl Stage {
    fn start<R: Record>(seed: u64, rows_requested: u64) -> Self {
        info!(table = R::TABLE, rows = rows_requested, "generating table");
        Self {
            rows_requested,
            started: Instant::now(),
            rng: ChaCha8Rng::seed_from_u64(hash_seed(seed, R::TABLE)),
        }
    }
}

fn check_options(options: &GenerateOptions) -> Result<(), GenerationError> {
    let avg = options.avg_items_per_order;
    if !avg.is_finite() || !(0.0..=ITEMS_PER_ORDER.1 as f64).contains(&avg) {
        return Err(GenerationError::InvalidOptions(format!(
            "avg_items_per_order must be between 0 and {}, got {avg}",
            ITEMS_PER_ORDER.1
        )));
    }
    Ok(())
}

/// Per-table seed, so resizing one table leaves the others unchanged.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_seeds_differ_per_table() {
        let seeds: Vec<u64> = ecomgen_core::TABLES
            .iter()
            .map(|table| hash_seed(7, table))
            .collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(hash_seed(7, "orders"), hash_seed(7, "orders"));
    }

    #[test]
    fn avg_items_per_order_must_be_a_plausible_count() {
        for avg in [f64::NAN, f64::INFINITY, -1.0, 1e30, 6.5] {
            let options = GenerateOptions {
                avg_items_per_order: avg,
                ..GenerateOptions::default()
            };
            assert!(
                matches!(check_options(&options), Err(GenerationError::InvalidOptions(_))),
                "{avg}"
            );
        }
        for avg in [0.0, 2.5, 6.0] {
            let options = GenerateOptions {
                avg_items_per_order: avg,
                ..GenerateOptions::default()
            };
            assert!(check_options(&options).is_ok(), "{avg}");
        }
    }
}
