use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::Record;

/// Declares a categorical field with a fixed set of CSV labels.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical!(
    Gender {
        Male => "M",
        Female => "F",
        Other => "O",
    }
);

categorical!(
    CustomerSegment {
        Premium => "Premium",
        Standard => "Standard",
        Basic => "Basic",
    }
);

categorical!(
    /// Product category, also appended to the product name.
    Category {
        Electronics => "Electronics",
        Clothing => "Clothing",
        Books => "Books",
        HomeKitchen => "Home & Kitchen",
        Sports => "Sports",
        Beauty => "Beauty",
        Automotive => "Automotive",
        Toys => "Toys",
    }
);

categorical!(
    Brand {
        BrandA => "BrandA",
        BrandB => "BrandB",
        BrandC => "BrandC",
        BrandD => "BrandD",
        BrandE => "BrandE",
        GenericBrand => "GenericBrand",
    }
);

categorical!(
    OrderStatus {
        Completed => "completed",
        Pending => "pending",
        Cancelled => "cancelled",
        Refunded => "refunded",
        Shipped => "shipped",
    }
);

categorical!(
    PaymentMethod {
        CreditCard => "credit_card",
        DebitCard => "debit_card",
        Paypal => "paypal",
        BankTransfer => "bank_transfer",
        Cash => "cash",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub registration_date: NaiveDate,
    /// Independent of `registration_date`; no ordering is enforced.
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub customer_segment: CustomerSegment,
}

impl Record for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "address",
        "city",
        "country",
        "registration_date",
        "birth_date",
        "gender",
        "customer_segment",
    ];

    fn id(&self) -> u64 {
        self.customer_id
    }
}

/// Catalog product. `price`/`cost` and `in_stock`/`stock_quantity` are
/// drawn independently of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u64,
    pub product_name: String,
    pub category: Category,
    pub brand: Brand,
    pub price: f64,
    pub cost: f64,
    pub weight_kg: f64,
    pub dimensions: String,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub supplier_id: u32,
    pub launch_date: NaiveDate,
}

impl Record for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "brand",
        "price",
        "cost",
        "weight_kg",
        "dimensions",
        "in_stock",
        "stock_quantity",
        "supplier_id",
        "launch_date",
    ];

    fn id(&self) -> u64 {
        self.product_id
    }
}

/// Customer order. `total_amount` is not derived from the other amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u64,
    pub customer_id: u64,
    pub order_date: NaiveDate,
    pub order_status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_cost: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub shipping_address: String,
    pub delivery_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Record for Order {
    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "customer_id",
        "order_date",
        "order_status",
        "payment_method",
        "shipping_cost",
        "tax_amount",
        "discount_amount",
        "total_amount",
        "shipping_address",
        "delivery_date",
        "notes",
    ];

    fn id(&self) -> u64 {
        self.order_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Sequential across the whole collection, not per order.
    pub item_id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub discount_applied: f64,
}

impl Record for OrderItem {
    const TABLE: &'static str = "order_items";
    const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
        "total_price",
        "discount_applied",
    ];

    fn id(&self) -> u64 {
        self.item_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: u64,
    pub customer_id: u64,
    pub product_id: u64,
    pub rating: u8,
    pub review_text: String,
    pub review_date: NaiveDate,
    pub helpful_votes: u32,
    pub verified_purchase: bool,
}

impl Record for Review {
    const TABLE: &'static str = "reviews";
    const COLUMNS: &'static [&'static str] = &[
        "review_id",
        "customer_id",
        "product_id",
        "rating",
        "review_text",
        "review_date",
        "helpful_votes",
        "verified_purchase",
    ];

    fn id(&self) -> u64 {
        self.review_id
    }
}

/// Maximum review text length in characters for a rating.
pub fn review_text_limit(rating: u8) -> usize {
    match rating {
        4.. => 200,
        3 => 150,
        _ => 100,
    }
}

/// Rounds a monetary amount to two decimals.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// All five collections of one run, in pipeline order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub reviews: Vec<Review>,
}

impl Dataset {
    pub fn total_records(&self) -> usize {
        self.customers.len()
            + self.products.len()
            + self.orders.len()
            + self.order_items.len()
            + self.reviews.len()
    }
}
