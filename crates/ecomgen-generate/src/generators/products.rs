use ecomgen_core::{Brand, Category, Product};
use rand::Rng;

use super::{GeneratorContext, coin, currency, pick};

const LAUNCH_YEARS: u32 = 3;

/// Generate `count` catalog products with ids `1..=count`.
///
/// Price and cost are drawn independently, so cost may exceed price.
pub fn generate_products(
    ctx: &GeneratorContext<'_>,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Product> {
    (1..=count as u64)
        .map(|product_id| {
            let category = pick(Category::ALL, rng);
            Product {
                product_id,
                product_name: format!("{} {}", ctx.faker.catch_phrase(rng), category),
                category,
                brand: pick(Brand::ALL, rng),
                price: currency(5.99, 999.99, rng),
                cost: currency(2.99, 500.00, rng),
                weight_kg: currency(0.1, 50.0, rng),
                dimensions: format!(
                    "{}x{}x{}",
                    rng.random_range(5..=100),
                    rng.random_range(5..=100),
                    rng.random_range(5..=100)
                ),
                in_stock: coin(rng),
                stock_quantity: rng.random_range(0..=1000),
                supplier_id: rng.random_range(1..=50),
                launch_date: ctx.date_within_years(LAUNCH_YEARS, rng),
            }
        })
        .collect()
}
