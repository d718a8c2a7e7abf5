use std::collections::BTreeMap;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ecomgen_core::{Record, review_text_limit, round_currency};
use ecomgen_generate::errors::GenerationError;
use ecomgen_generate::generators::{
    GeneratorContext, generate_customers, generate_order_items, generate_orders,
    generate_products, generate_reviews,
};
use ecomgen_generate::output::csv::write_records_csv;
use ecomgen_generate::{FakeRsAdapter, LocaleKey};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap_or_default()
}

fn faker() -> FakeRsAdapter {
    FakeRsAdapter::new(LocaleKey::ALL).expect("faker")
}

#[test]
fn ids_are_contiguous_from_one() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let customers = generate_customers(&ctx, 25, &mut rng);
    let products = generate_products(&ctx, 12, &mut rng);
    let orders = generate_orders(&ctx, &customers, &products, 30, &mut rng).expect("orders");
    let reviews =
        generate_reviews(&ctx, &customers, &products, &orders, 40, &mut rng).expect("reviews");

    assert_ids(&customers);
    assert_ids(&products);
    assert_ids(&orders);
    assert_ids(&reviews);
}

#[test]
fn zero_counts_yield_empty_collections() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    assert!(generate_customers(&ctx, 0, &mut rng).is_empty());
    let orders = generate_orders(&ctx, &[], &[], 0, &mut rng).expect("no orders");
    assert!(orders.is_empty());
    let items = generate_order_items(&orders, &[], 2.5, &mut rng).expect("no items");
    assert!(items.is_empty());
}

#[test]
fn order_fields_follow_ranges() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let customers = generate_customers(&ctx, 10, &mut rng);
    let orders = generate_orders(&ctx, &customers, &[], 400, &mut rng).expect("orders");

    let earliest = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap_or_default();
    let mut delivered = 0;
    let mut with_notes = 0;
    for order in &orders {
        assert!((1..=10).contains(&order.customer_id));
        assert!(order.order_date >= earliest && order.order_date <= reference_date());
        assert!((0.0..=25.99).contains(&order.shipping_cost));
        assert!((0.0..=50.0).contains(&order.tax_amount));
        assert!((0.0..=100.0).contains(&order.discount_amount));
        assert!((10.0..=2000.0).contains(&order.total_amount));
        assert!(!order.shipping_address.contains('\n'));

        if let Some(delivery) = order.delivery_date {
            let days = (delivery - order.order_date).num_days();
            assert!((1..=30).contains(&days), "delivery after {days} days");
            delivered += 1;
        }
        if let Some(notes) = &order.notes {
            assert!(notes.chars().count() <= 100);
            with_notes += 1;
        }
    }

    // both optional fields are coin flips
    assert!(delivered > 100 && delivered < 300, "{delivered}");
    assert!(with_notes > 100 && with_notes < 300, "{with_notes}");
}

#[test]
fn order_items_copy_price_and_derive_total() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let customers = generate_customers(&ctx, 5, &mut rng);
    let products = generate_products(&ctx, 3, &mut rng);
    let orders = generate_orders(&ctx, &customers, &products, 10, &mut rng).expect("orders");
    let items = generate_order_items(&orders, &products, 2.5, &mut rng).expect("items");

    let mut per_order: BTreeMap<u64, usize> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.item_id, index as u64 + 1);
        let product = &products[item.product_id as usize - 1];
        assert_eq!(item.unit_price, product.price);
        assert!((1..=5).contains(&item.quantity));
        let expected = round_currency(item.quantity as f64 * item.unit_price);
        assert!((item.total_price - expected).abs() <= 1e-2);
        assert!(item.discount_applied >= 0.0);
        assert!(item.discount_applied <= round_currency(item.unit_price * 0.3));
        *per_order.entry(item.order_id).or_default() += 1;
    }

    assert_eq!(per_order.len(), orders.len());
    for (order_id, count) in per_order {
        assert!((1..=6).contains(&count), "order {order_id} has {count} items");
    }
}

#[test]
fn avg_items_per_order_does_not_size_the_output() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let customers = generate_customers(&ctx, 2, &mut rng);
    let products = generate_products(&ctx, 2, &mut rng);
    let orders = generate_orders(&ctx, &customers, &products, 3, &mut rng).expect("orders");

    let items = generate_order_items(&orders, &products, 1e30, &mut rng).expect("items");
    assert!((3..=18).contains(&items.len()), "{}", items.len());
}

#[test]
fn review_text_length_follows_rating() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let customers = generate_customers(&ctx, 4, &mut rng);
    let products = generate_products(&ctx, 4, &mut rng);
    let reviews =
        generate_reviews(&ctx, &customers, &products, &[], 300, &mut rng).expect("reviews");

    for review in &reviews {
        assert!((1..=5).contains(&review.rating));
        assert!(review.review_text.chars().count() <= review_text_limit(review.rating));
        assert!(review.helpful_votes <= 50);
        assert!(review.review_date <= reference_date());
    }
}

#[test]
fn dependents_of_empty_parents_are_rejected() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let customers = generate_customers(&ctx, 2, &mut rng);
    let orders = generate_orders(&ctx, &customers, &[], 2, &mut rng).expect("orders");

    let result = generate_order_items(&orders, &[], 2.5, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));

    let result = generate_reviews(&ctx, &customers, &[], &orders, 1, &mut rng);
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
}

#[test]
fn csv_quotes_delimiters_and_keeps_empty_optionals() {
    let faker = faker();
    let ctx = GeneratorContext::new(&faker, reference_date());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let customers = generate_customers(&ctx, 1, &mut rng);
    let mut orders = generate_orders(&ctx, &customers, &[], 2, &mut rng).expect("orders");
    orders[0].notes = Some("fragile, \"handle\" with care\nsecond line".to_string());
    orders[0].delivery_date = None;
    orders[1].notes = None;

    let path = std::env::temp_dir().join(format!("ecomgen_orders_{}.csv", uuid::Uuid::new_v4()));
    let bytes = write_records_csv(&path, &orders).expect("write csv");
    assert_eq!(bytes, std::fs::metadata(&path).expect("metadata").len());

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.expect("row")).collect();
    assert_eq!(rows.len(), 2);

    let notes = ecomgen_core::Order::COLUMNS
        .iter()
        .position(|column| *column == "notes")
        .expect("notes column");
    let delivery = ecomgen_core::Order::COLUMNS
        .iter()
        .position(|column| *column == "delivery_date")
        .expect("delivery column");

    assert_eq!(&rows[0][notes], "fragile, \"handle\" with care\nsecond line");
    assert_eq!(&rows[0][delivery], "");
    assert_eq!(&rows[1][notes], "");
    assert_eq!(rows[0].len(), ecomgen_core::Order::COLUMNS.len());
}

fn assert_ids<R: Record>(records: &[R]) {
    let ids: Vec<u64> = records.iter().map(Record::id).collect();
    let expected: Vec<u64> = (1..=records.len() as u64).collect();
    assert_eq!(ids, expected, "{} ids", R::TABLE);
}
