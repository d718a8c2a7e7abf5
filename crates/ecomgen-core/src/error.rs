use thiserror::Error;

/// Core error type shared across ecomgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A generated collection violates a dataset invariant.
    #[error("invalid dataset: {table}: {message}")]
    InvalidDataset { table: &'static str, message: String },
}

impl Error {
    pub(crate) fn invalid(table: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidDataset {
            table,
            message: message.into(),
        }
    }
}

/// Convenience alias for results returned by ecomgen crates.
pub type Result<T> = std::result::Result<T, Error>;
