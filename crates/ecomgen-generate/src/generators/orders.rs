use chrono::Days;
use ecomgen_core::{Customer, DELIVERY_DAYS, Order, OrderStatus, PaymentMethod, Product};
use rand::Rng;

use super::{GeneratorContext, coin, currency, pick, pick_index, require_parents};
use crate::errors::GenerationError;

const ORDER_YEARS: u32 = 2;
const NOTES_MAX_CHARS: usize = 100;

/// Generate `count` orders placed by customers sampled with replacement.
///
/// `_products` is accepted for pipeline symmetry; no order field reads it.
/// Monetary fields are independent draws and `total_amount` is not their sum.
pub fn generate_orders(
    ctx: &GeneratorContext<'_>,
    customers: &[Customer],
    _products: &[Product],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Order>, GenerationError> {
    require_parents("orders", "customers", customers.len(), count)?;

    let (min_days, max_days) = DELIVERY_DAYS;
    let mut orders = Vec::with_capacity(count);
    for order_id in 1..=count as u64 {
        let customer = &customers[pick_index(customers.len(), rng)];
        let order_date = ctx.date_within_years(ORDER_YEARS, rng);

        let order_status = pick(OrderStatus::ALL, rng);
        let payment_method = pick(PaymentMethod::ALL, rng);
        let shipping_cost = currency(0.0, 25.99, rng);
        let tax_amount = currency(0.0, 50.00, rng);
        let discount_amount = currency(0.0, 100.00, rng);
        let total_amount = currency(10.00, 2000.00, rng);
        let shipping_address = ctx.faker.address(rng);

        let delivery_date = if coin(rng) {
            let days = rng.random_range(min_days..=max_days) as u64;
            order_date.checked_add_days(Days::new(days))
        } else {
            None
        };
        let notes = if coin(rng) {
            Some(ctx.faker.text(NOTES_MAX_CHARS, rng))
        } else {
            None
        };

        orders.push(Order {
            order_id,
            customer_id: customer.customer_id,
            order_date,
            order_status,
            payment_method,
            shipping_cost,
            tax_amount,
            discount_amount,
            total_amount,
            shipping_address,
            delivery_date,
            notes,
        });
    }
    Ok(orders)
}
