use ecomgen_core::{Customer, Order, Product, Review, review_text_limit};
use rand::Rng;

use super::{GeneratorContext, coin, pick_index, require_parents};
use crate::errors::GenerationError;

const REVIEW_YEARS: u32 = 1;

/// Generate `count` reviews for independently sampled customers and products.
///
/// Reviews are not anchored to purchases: `_orders` is unused and
/// `verified_purchase` is a coin flip.
pub fn generate_reviews(
    ctx: &GeneratorContext<'_>,
    customers: &[Customer],
    products: &[Product],
    _orders: &[Order],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Review>, GenerationError> {
    require_parents("reviews", "customers", customers.len(), count)?;
    require_parents("reviews", "products", products.len(), count)?;

    let mut reviews = Vec::with_capacity(count);
    for review_id in 1..=count as u64 {
        let customer = &customers[pick_index(customers.len(), rng)];
        let product = &products[pick_index(products.len(), rng)];
        let rating: u8 = rng.random_range(1..=5);
        let review_text = ctx.faker.text(review_text_limit(rating), rng);

        reviews.push(Review {
            review_id,
            customer_id: customer.customer_id,
            product_id: product.product_id,
            rating,
            review_text,
            review_date: ctx.date_within_years(REVIEW_YEARS, rng),
            helpful_votes: rng.random_range(0..=50),
            verified_purchase: coin(rng),
        });
    }
    Ok(reviews)
}
