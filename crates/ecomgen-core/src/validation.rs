use std::collections::BTreeSet;

use crate::entities::{
    Customer, Dataset, Order, OrderItem, Product, Review, review_text_limit, round_currency,
};
use crate::error::{Error, Result};
use crate::schema::Record;

/// Inclusive bounds on the number of items generated per order.
pub const ITEMS_PER_ORDER: (usize, usize) = (1, 6);
/// Inclusive bounds on days between order and delivery.
pub const DELIVERY_DAYS: (i64, i64) = (1, 30);

const PRICE_TOLERANCE: f64 = 1e-2;

/// Validate every collection of a dataset against the generation invariants.
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    validate_ids(&dataset.customers)?;
    validate_ids(&dataset.products)?;
    validate_orders(&dataset.orders, &dataset.customers)?;
    validate_order_items(&dataset.order_items, &dataset.orders, &dataset.products)?;
    validate_reviews(&dataset.reviews, &dataset.customers, &dataset.products)?;
    Ok(())
}

/// Check that record ids are exactly `1..=n` in generation order.
pub fn validate_ids<R: Record>(records: &[R]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let expected = index as u64 + 1;
        if record.id() != expected {
            return Err(Error::invalid(
                R::TABLE,
                format!("row {index} has id {} (expected {expected})", record.id()),
            ));
        }
    }
    Ok(())
}

pub fn validate_orders(orders: &[Order], customers: &[Customer]) -> Result<()> {
    validate_ids(orders)?;
    for order in orders {
        check_fk(Order::TABLE, order.order_id, "customer_id", order.customer_id, customers.len())?;

        if let Some(delivery) = order.delivery_date {
            let days = (delivery - order.order_date).num_days();
            if days < DELIVERY_DAYS.0 || days > DELIVERY_DAYS.1 {
                return Err(Error::invalid(
                    Order::TABLE,
                    format!(
                        "order {} delivered {days} days after order date",
                        order.order_id
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Checks item ids, foreign keys, derived totals and per-order grouping.
///
/// Items of one order must be contiguous, so the per-order count can be
/// checked in a single pass. Every order needs at least one item.
pub fn validate_order_items(
    items: &[OrderItem],
    orders: &[Order],
    products: &[Product],
) -> Result<()> {
    validate_ids(items)?;

    let mut seen_orders = BTreeSet::new();
    let mut current: Option<(u64, usize)> = None;

    for item in items {
        check_fk(OrderItem::TABLE, item.item_id, "order_id", item.order_id, orders.len())?;
        check_fk(OrderItem::TABLE, item.item_id, "product_id", item.product_id, products.len())?;

        let expected = round_currency(item.quantity as f64 * item.unit_price);
        if (item.total_price - expected).abs() > PRICE_TOLERANCE {
            return Err(Error::invalid(
                OrderItem::TABLE,
                format!(
                    "item {} total_price {} != {} x {}",
                    item.item_id, item.total_price, item.quantity, item.unit_price
                ),
            ));
        }

        current = match current {
            Some((order_id, count)) if order_id == item.order_id => Some((order_id, count + 1)),
            previous => {
                if let Some((order_id, count)) = previous {
                    check_item_count(order_id, count)?;
                }
                if !seen_orders.insert(item.order_id) {
                    return Err(Error::invalid(
                        OrderItem::TABLE,
                        format!("items of order {} are not contiguous", item.order_id),
                    ));
                }
                Some((item.order_id, 1))
            }
        };
    }

    if let Some((order_id, count)) = current {
        check_item_count(order_id, count)?;
    }

    if let Some(order) = orders
        .iter()
        .find(|order| !seen_orders.contains(&order.order_id))
    {
        check_item_count(order.order_id, 0)?;
    }

    Ok(())
}

pub fn validate_reviews(
    reviews: &[Review],
    customers: &[Customer],
    products: &[Product],
) -> Result<()> {
    validate_ids(reviews)?;
    for review in reviews {
        check_fk(
            Review::TABLE,
            review.review_id,
            "customer_id",
            review.customer_id,
            customers.len(),
        )?;
        check_fk(Review::TABLE, review.review_id, "product_id", review.product_id, products.len())?;

        if !(1..=5).contains(&review.rating) {
            return Err(Error::invalid(
                Review::TABLE,
                format!("review {} has rating {}", review.review_id, review.rating),
            ));
        }

        let len = review.review_text.chars().count();
        let limit = review_text_limit(review.rating);
        if len > limit {
            return Err(Error::invalid(
                Review::TABLE,
                format!(
                    "review {} text has {len} chars (rating {} allows {limit})",
                    review.review_id, review.rating
                ),
            ));
        }
    }
    Ok(())
}

fn check_fk(
    table: &'static str,
    id: u64,
    column: &str,
    value: u64,
    parent_len: usize,
) -> Result<()> {
    if value == 0 || value > parent_len as u64 {
        return Err(Error::invalid(
            table,
            format!("row {id} {column}={value} outside 1..={parent_len}"),
        ));
    }
    Ok(())
}

fn check_item_count(order_id: u64, count: usize) -> Result<()> {
    let (min, max) = ITEMS_PER_ORDER;
    if count < min || count > max {
        return Err(Error::invalid(
            OrderItem::TABLE,
            format!("order {order_id} has {count} items (expected {min}..={max})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{Brand, Category, CustomerSegment, Gender, OrderStatus, PaymentMethod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn customer(id: u64) -> Customer {
        Customer {
            customer_id: id,
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St, Springfield, IL 62701".to_string(),
            city: "Springfield".to_string(),
            country: "Brazil".to_string(),
            registration_date: date(2023, 5, 1),
            birth_date: date(1990, 1, 1),
            gender: Gender::Female,
            customer_segment: CustomerSegment::Basic,
        }
    }

    fn order(id: u64, customer_id: u64, delivery: Option<NaiveDate>) -> Order {
        Order {
            order_id: id,
            customer_id,
            order_date: date(2024, 1, 1),
            order_status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
            shipping_cost: 1.0,
            tax_amount: 2.0,
            discount_amount: 3.0,
            total_amount: 40.0,
            shipping_address: "2 Side St".to_string(),
            delivery_date: delivery,
            notes: None,
        }
    }

    fn item(id: u64, order_id: u64) -> OrderItem {
        OrderItem {
            item_id: id,
            order_id,
            product_id: 1,
            quantity: 3,
            unit_price: 19.99,
            total_price: 59.97,
            discount_applied: 0.0,
        }
    }

    #[test]
    fn ids_must_start_at_one_without_gaps() {
        assert!(validate_ids(&[customer(1), customer(2)]).is_ok());
        assert!(validate_ids::<Customer>(&[]).is_ok());
        let err = validate_ids(&[customer(1), customer(3)]).unwrap_err();
        assert!(err.to_string().contains("customers"));
    }

    #[test]
    fn delivery_window_is_inclusive() {
        let customers = vec![customer(1)];
        let ok = vec![
            order(1, 1, Some(date(2024, 1, 2))),
            order(2, 1, Some(date(2024, 1, 31))),
            order(3, 1, None),
        ];
        assert!(validate_orders(&ok, &customers).is_ok());

        let same_day = vec![order(1, 1, Some(date(2024, 1, 1)))];
        assert!(validate_orders(&same_day, &customers).is_err());

        let late = vec![order(1, 1, Some(date(2024, 2, 1)))];
        assert!(validate_orders(&late, &customers).is_err());
    }

    #[test]
    fn dangling_customer_is_rejected() {
        let customers = vec![customer(1)];
        let orders = vec![order(1, 2, None)];
        assert!(validate_orders(&orders, &customers).is_err());
    }

    #[test]
    fn item_total_must_match_quantity_times_price() {
        let orders = vec![order(1, 1, None)];
        let products = vec![product_stub()];
        assert!(validate_order_items(&[item(1, 1)], &orders, &products).is_ok());

        let mut bad = item(1, 1);
        bad.total_price = 60.5;
        assert!(validate_order_items(&[bad], &orders, &products).is_err());
    }

    #[test]
    fn items_per_order_are_bounded_and_grouped() {
        let orders = vec![order(1, 1, None), order(2, 1, None)];
        let products = vec![product_stub()];

        let grouped = vec![item(1, 1), item(2, 1), item(3, 2)];
        assert!(validate_order_items(&grouped, &orders, &products).is_ok());

        let too_many: Vec<_> = (1..=7).map(|id| item(id, 1)).collect();
        assert!(validate_order_items(&too_many, &orders, &products).is_err());

        let split = vec![item(1, 1), item(2, 2), item(3, 1)];
        assert!(validate_order_items(&split, &orders, &products).is_err());
    }

    #[test]
    fn order_without_items_is_rejected() {
        let orders = vec![order(1, 1, None), order(2, 1, None)];
        let products = vec![product_stub()];

        let err = validate_order_items(&[item(1, 1)], &orders, &products).unwrap_err();
        assert!(err.to_string().contains("order 2 has 0 items"), "{err}");

        assert!(validate_order_items(&[], &[], &products).is_ok());
        assert!(validate_order_items(&[], &orders, &products).is_err());
    }

    #[test]
    fn review_text_respects_rating_bucket() {
        let customers = vec![customer(1)];
        let products = vec![product_stub()];
        let mut review = Review {
            review_id: 1,
            customer_id: 1,
            product_id: 1,
            rating: 3,
            review_text: "x".repeat(150),
            review_date: date(2024, 6, 1),
            helpful_votes: 0,
            verified_purchase: true,
        };
        assert!(validate_reviews(std::slice::from_ref(&review), &customers, &products).is_ok());

        review.review_text.push('x');
        assert!(validate_reviews(&[review], &customers, &products).is_err());
    }

    fn product_stub() -> Product {
        Product {
            product_id: 1,
            product_name: "Stub Toys".to_string(),
            category: Category::Toys,
            brand: Brand::BrandA,
            price: 19.99,
            cost: 5.0,
            weight_kg: 1.0,
            dimensions: "5x5x5".to_string(),
            in_stock: true,
            stock_quantity: 10,
            supplier_id: 1,
            launch_date: date(2023, 1, 1),
        }
    }
}
