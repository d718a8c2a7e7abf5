use ecomgen_core::{ITEMS_PER_ORDER, Order, OrderItem, Product, round_currency};
use rand::Rng;
use tracing::debug;

use super::{coin, pick_index, require_parents};
use crate::errors::GenerationError;

const MAX_DISCOUNT_RATE: f64 = 0.3;

/// Generate 1..=6 line items for every order, in order sequence.
///
/// `avg_items_per_order` only feeds the logged estimate; the per-order count
/// is always uniform. Item ids run across the whole output, not per order.
pub fn generate_order_items(
    orders: &[Order],
    products: &[Product],
    avg_items_per_order: f64,
    rng: &mut impl Rng,
) -> Result<Vec<OrderItem>, GenerationError> {
    require_parents("order items", "products", products.len(), orders.len())?;

    let estimate = (orders.len() as f64 * avg_items_per_order) as u64;
    debug!(orders = orders.len(), estimate, "estimated order items");

    let (min_items, max_items) = ITEMS_PER_ORDER;
    let mut items = Vec::with_capacity(orders.len());
    let mut item_id = 1_u64;

    for order in orders {
        let count = rng.random_range(min_items..=max_items);
        for _ in 0..count {
            let product = &products[pick_index(products.len(), rng)];
            let quantity: u32 = rng.random_range(1..=5);
            let unit_price = product.price;
            let discount_applied = if coin(rng) {
                round_currency(rng.random_range(0.0..=unit_price * MAX_DISCOUNT_RATE))
            } else {
                0.0
            };

            items.push(OrderItem {
                item_id,
                order_id: order.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
                total_price: round_currency(quantity as f64 * unit_price),
                discount_applied,
            });
            item_id += 1;
        }
    }
    Ok(items)
}
