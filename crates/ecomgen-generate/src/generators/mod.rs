//! Per-entity record generators.
//!
//! Each generator builds its records in id order and only reads the
//! collections generated before it.

pub mod customers;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod reviews;

use chrono::{Days, Months, NaiveDate};
use ecomgen_core::round_currency;
use rand::Rng;

use crate::errors::GenerationError;
use crate::faker_rs::FakeRsAdapter;

pub use customers::generate_customers;
pub use order_items::generate_order_items;
pub use orders::generate_orders;
pub use products::generate_products;
pub use reviews::generate_reviews;

/// Shared inputs for every generator of a run.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub faker: &'a FakeRsAdapter,
    /// The "today" that relative date ranges are anchored to.
    pub reference_date: NaiveDate,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(faker: &'a FakeRsAdapter, reference_date: NaiveDate) -> Self {
        Self {
            faker,
            reference_date,
        }
    }

    /// Uniform date between `years` years ago and the reference date, inclusive.
    pub fn date_within_years(&self, years: u32, rng: &mut impl Rng) -> NaiveDate {
        let start = years_before(self.reference_date, years);
        date_between(start, self.reference_date, rng)
    }

    /// Birth date for an age in `min_age..=max_age` at the reference date.
    pub fn date_of_birth(&self, min_age: u32, max_age: u32, rng: &mut impl Rng) -> NaiveDate {
        let latest = years_before(self.reference_date, min_age);
        let earliest = years_before(self.reference_date, max_age + 1)
            .checked_add_days(Days::new(1))
            .unwrap_or(latest);
        date_between(earliest, latest, rng)
    }
}

/// Uniform index into a non-empty collection of `len` elements.
pub fn pick_index(len: usize, rng: &mut impl Rng) -> usize {
    rng.random_range(0..len)
}

/// Uniform choice from a fixed set of categorical values.
pub fn pick<T: Copy>(values: &[T], rng: &mut impl Rng) -> T {
    values[pick_index(values.len(), rng)]
}

/// Uniform amount in `[min, max]`, rounded to cents.
pub fn currency(min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    round_currency(rng.random_range(min..=max))
}

pub fn coin(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

pub fn date_between(start: NaiveDate, end: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    let span = (end - start).num_days().max(0) as u64;
    let offset = rng.random_range(0..=span);
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

pub(crate) fn require_parents(
    child: &str,
    parent: &str,
    parent_len: usize,
    count: usize,
) -> Result<(), GenerationError> {
    if count > 0 && parent_len == 0 {
        return Err(GenerationError::InvalidOptions(format!(
            "cannot generate {child} without {parent}"
        )));
    }
    Ok(())
}
