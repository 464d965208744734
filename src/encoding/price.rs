//! Price type and its textual encoding

use std::fmt;

use crate::error::StoreError;

/// Whole-unit currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// Price of `units` whole currency units
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Amount in whole currency units
    pub fn units(&self) -> u64 {
        self.0
    }

    /// Parse price text from a request.
    ///
    /// Only plain ASCII digits are accepted: no sign, no whitespace, no
    /// fractional part. Values that do not fit in a `u64` are rejected too.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StoreError::InvalidPrice(text.to_string()));
        }

        text.parse::<u64>()
            .map(Price)
            .map_err(|_| StoreError::InvalidPrice(text.to_string()))
    }
}

impl From<u64> for Price {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.00", self.0)
    }
}
