//! Errors reported by price store operations

use thiserror::Error;

/// Failure of a single store operation. Never fatal to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The price text is not a non-negative base-10 integer
    #[error("new price is invalid: {0:?}")]
    InvalidPrice(String),
    /// The item is not present in the store
    #[error("no such item: {0:?}")]
    ItemNotFound(String),
}

impl StoreError {
    /// `ItemNotFound` for `item`
    pub fn not_found(item: &str) -> Self {
        Self::ItemNotFound(item.to_string())
    }
}
