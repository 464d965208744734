//! Value encoding/decoding
//!
//! Prices arrive as request text and leave as display text; this module owns
//! both directions.

pub mod price;

pub use price::Price;
