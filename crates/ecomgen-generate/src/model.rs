use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::faker_rs::LocaleKey;

/// Options for the generation engine.
///
/// Deserializes with per-field defaults, so a config file only needs the
/// keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written. Created if absent.
    pub out_dir: PathBuf,
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    /// Only used for the logged estimate of order items. Must be finite and
    /// within `0..=6`.
    pub avg_items_per_order: f64,
    pub reviews: usize,
    /// Run seed. A random seed is drawn and reported when absent.
    pub seed: Option<u64>,
    /// Anchor for relative date ranges. Defaults to today.
    pub reference_date: Option<NaiveDate>,
    /// Locales mixed by the faker, picked uniformly per value.
    pub locales: Vec<LocaleKey>,
    /// Check dataset invariants before writing each file.
    pub validate: bool,
    /// Also write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("/datasets"),
            customers: 10_000,
            products: 1_000,
            orders: 50_000,
            avg_items_per_order: 2.5,
            reviews: 25_000,
            seed: None,
            reference_date: None,
            locales: LocaleKey::ALL.to_vec(),
            validate: true,
            write_report: false,
        }
    }
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub path: PathBuf,
    /// Requested count; for order items, the estimate from the average.
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub reference_date: NaiveDate,
    pub locales: Vec<LocaleKey>,
    pub tables: Vec<TableReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(
        run_id: String,
        seed: u64,
        reference_date: NaiveDate,
        locales: Vec<LocaleKey>,
    ) -> Self {
        Self {
            run_id,
            seed,
            reference_date,
            locales,
            tables: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.rows_total += table.rows_generated;
        self.bytes_written += table.bytes_written;
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }
}
