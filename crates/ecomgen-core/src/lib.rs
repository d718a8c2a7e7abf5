//! Core record types and invariants for ecomgen.
//!
//! This crate defines the e-commerce entities written to CSV, the table
//! catalog used for headers and file names, and validation of the
//! referential and derived-field invariants of a generated dataset.

pub mod entities;
pub mod error;
pub mod schema;
pub mod validation;

pub use entities::{
    Brand, Category, Customer, CustomerSegment, Dataset, Gender, Order, OrderItem, OrderStatus,
    PaymentMethod, Product, Review, review_text_limit, round_currency,
};
pub use error::{Error, Result};
pub use schema::{Record, TABLES};
pub use validation::{
    DELIVERY_DAYS, ITEMS_PER_ORDER, validate_dataset, validate_ids, validate_order_items,
    validate_orders, validate_reviews,
};
