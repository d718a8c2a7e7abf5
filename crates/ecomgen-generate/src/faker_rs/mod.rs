//! Locale-mixed fake values backed by the `fake` crate.

mod adapter;
pub mod locales;
mod text;

pub use adapter::FakeRsAdapter;
pub use locales::LocaleKey;
