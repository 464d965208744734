use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::warn;

use crate::encoding::Price;

mod ops;

pub use ops::Listing;

/// Item name to price map shared by every request handler
pub type Entries = HashMap<String, Price>;

/// In-memory price store
///
/// All access goes through [`PriceStore::with_read`] and
/// [`PriceStore::with_write`]. The lock guard lives only for the duration of
/// the closure, so it is released on every exit path, unwinding included.
pub struct PriceStore {
    data: RwLock<Entries>,
}

impl PriceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_entries(std::iter::empty::<(String, Price)>())
    }

    /// Create a store holding the given entries
    pub fn with_entries<I, K, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<Price>,
    {
        let data = entries
            .into_iter()
            .map(|(item, price)| (item.into(), price.into()))
            .collect();
        Self {
            data: RwLock::new(data),
        }
    }

    /// Store with the stock seed catalogue
    pub fn seeded() -> Self {
        Self::with_entries([("shoes", 50u64), ("socks", 5u64)])
    }

    /// Run `f` with a shared view of the map
    pub fn with_read<R>(&self, f: impl FnOnce(&Entries) -> R) -> R {
        let data = self.data.read().unwrap_or_else(|e| {
            warn!("price store lock poisoned, recovering for read");
            PoisonError::into_inner(e)
        });
        f(&data)
    }

    /// Run `f` with exclusive, mutable access to the map
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        let mut data = self.data.write().unwrap_or_else(|e| {
            warn!("price store lock poisoned, recovering for write");
            PoisonError::into_inner(e)
        });
        f(&mut data)
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.with_read(|data| data.len())
    }

    /// Whether the store holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PriceStore {
    fn default() -> Self {
        Self::new()
    }
}
