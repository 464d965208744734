//! PriceDB: an in-memory item price store shared by concurrent HTTP handlers

pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod store;

pub use encoding::Price;
pub use error::StoreError;
pub use store::{Listing, PriceStore};
