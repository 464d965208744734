//! Operations over the price store
//!
//! List and Price take the read lock. Create, Delete and Update take the
//! write lock and snapshot the resulting listing before releasing it, so the
//! listing a writer gets back is exactly the state its own write produced.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::{Entries, PriceStore};
use crate::encoding::Price;
use crate::error::StoreError;

/// Snapshot of every (item, price) pair, in no particular order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing(Vec<(String, Price)>);

impl Listing {
    fn snapshot(data: &Entries) -> Self {
        Self(
            data.iter()
                .map(|(item, price)| (item.clone(), *price))
                .collect(),
        )
    }

    /// Iterate over (item, price) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Price)> {
        self.0.iter().map(|(item, price)| (item.as_str(), *price))
    }

    /// Number of items in the snapshot
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Price of `item` in the snapshot, if present
    pub fn get(&self, item: &str) -> Option<Price> {
        self.iter().find(|(name, _)| *name == item).map(|(_, price)| price)
    }

    /// Order-insensitive view, handy for comparing listings
    pub fn to_map(&self) -> HashMap<String, Price> {
        self.0.iter().cloned().collect()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (item, price) in self.iter() {
            writeln!(f, "{}: {}", item, price)?;
        }
        Ok(())
    }
}

impl PriceStore {
    /// List every item with its price
    pub fn list(&self) -> Listing {
        self.with_read(Listing::snapshot)
    }

    /// Look up the price of one item
    pub fn price(&self, item: &str) -> Result<Price, StoreError> {
        let price = self.with_read(|data| data.get(item).copied());
        debug!(item, found = price.is_some(), "price lookup");
        price.ok_or_else(|| StoreError::not_found(item))
    }

    /// Set `item` to `price`, inserting it if absent
    ///
    /// `item` must be non-empty; callers reject empty names before getting
    /// here, and debug builds assert it.
    pub fn create(&self, item: &str, price: &str) -> Result<Listing, StoreError> {
        debug_assert!(!item.is_empty(), "item name must not be empty");
        let price = Price::parse(price)?;
        let listing = self.with_write(|data| {
            data.insert(item.to_string(), price);
            Listing::snapshot(data)
        });
        debug!(item, %price, "item created");
        Ok(listing)
    }

    /// Remove `item`
    pub fn delete(&self, item: &str) -> Result<Listing, StoreError> {
        let listing = self.with_write(|data| {
            data.remove(item)
                .map(|_| Listing::snapshot(data))
                .ok_or_else(|| StoreError::not_found(item))
        })?;
        debug!(item, "item deleted");
        Ok(listing)
    }

    /// Change the price of an existing item; never inserts
    pub fn update(&self, item: &str, price: &str) -> Result<Listing, StoreError> {
        let price = Price::parse(price)?;
        let listing = self.with_write(|data| match data.get_mut(item) {
            Some(slot) => {
                *slot = price;
                Ok(Listing::snapshot(data))
            }
            None => Err(StoreError::not_found(item)),
        })?;
        debug!(item, %price, "item updated");
        Ok(listing)
    }
}
