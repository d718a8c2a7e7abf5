use ecomgen_core::{Customer, CustomerSegment, Gender};
use rand::Rng;

use super::{GeneratorContext, pick};

const REGISTRATION_YEARS: u32 = 5;
const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 80;

/// Generate `count` independent customers with ids `1..=count`.
pub fn generate_customers(
    ctx: &GeneratorContext<'_>,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Customer> {
    (1..=count as u64)
        .map(|customer_id| Customer {
            customer_id,
            first_name: ctx.faker.first_name(rng),
            last_name: ctx.faker.last_name(rng),
            email: ctx.faker.email(rng),
            phone: ctx.faker.phone(rng),
            address: ctx.faker.address(rng),
            city: ctx.faker.city(rng),
            country: ctx.faker.country(rng),
            registration_date: ctx.date_within_years(REGISTRATION_YEARS, rng),
            birth_date: ctx.date_of_birth(MIN_AGE, MAX_AGE, rng),
            gender: pick(Gender::ALL, rng),
            customer_segment: pick(CustomerSegment::ALL, rng),
        })
        .collect()
}
