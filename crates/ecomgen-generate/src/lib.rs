//! Synthetic e-commerce dataset generation for ecomgen.
//!
//! This crate generates customers, products, orders, order items and
//! reviews with referentially consistent foreign keys and writes each
//! collection to its own CSV file.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult, REPORT_FILE};
pub use errors::GenerationError;
pub use faker_rs::{FakeRsAdapter, LocaleKey};
pub use model::{GenerateOptions, GenerationReport, TableReport};
