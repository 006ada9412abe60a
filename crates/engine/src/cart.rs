//! A session's shopping cart.
//!
//! The cart maps item ids to quantities and preserves the order in which
//! items were first added, so the cart view lists lines in a stable order.
//! Stored quantities are always at least 1: nothing ever decrements an entry,
//! and `add` saturates instead of wrapping.

use indexmap::IndexMap;

use bonbon_core::ItemId;

/// A session's accumulated unpurchased item quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: IndexMap<ItemId, u32>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item, creating the entry at 1 if absent.
    ///
    /// The item id is not validated against the catalogue here; that is the
    /// router's responsibility before calling.
    pub fn add(&mut self, id: &ItemId) {
        self.entries
            .entry(id.clone())
            .and_modify(|quantity| *quantity = quantity.saturating_add(1))
            .or_insert(1);
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity stored for an item, 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.entries.iter().map(|(id, quantity)| (id, *quantity))
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.len()
    }
}
