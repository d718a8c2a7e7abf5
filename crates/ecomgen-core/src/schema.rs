use serde::Serialize;

/// Tables in the order the pipeline generates them.
pub const TABLES: &[&str] = &[
    "customers",
    "products",
    "orders",
    "order_items",
    "reviews",
];

/// A flat entity row that is written as one CSV line.
///
/// `COLUMNS` must list the struct fields in declaration order, since the
/// header is written from it and the row from the serde serializer.
pub trait Record: Serialize {
    /// Plural entity name, used as the table and file name.
    const TABLE: &'static str;
    /// Header columns in field declaration order.
    const COLUMNS: &'static [&'static str];

    /// Sequential identity of the record, starting at 1.
    fn id(&self) -> u64;

    fn file_name() -> String {
        format!("{}.csv", Self::TABLE)
    }
}
