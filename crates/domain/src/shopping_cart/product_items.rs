//! The collection of priced product items held by a cart.

use serde::{Deserialize, Serialize};

use super::{Money, PricedProductItem};

/// An immutable multiset of priced product items.
///
/// Adding the same item twice keeps two entries. Equality ignores entry
/// order: two collections are equal when they hold the same items the same
/// number of times.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductItems(Vec<PricedProductItem>);

impl ProductItems {
    /// Returns an empty collection.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns a new collection with `item` appended.
    #[must_use]
    pub fn add(&self, item: PricedProductItem) -> Self {
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.extend_from_slice(&self.0);
        items.push(item);
        Self(items)
    }

    /// Returns a new collection with one entry equal to `item` removed.
    ///
    /// If no entry matches, the returned collection equals `self`.
    #[must_use]
    pub fn remove(&self, item: &PricedProductItem) -> Self {
        let mut items = self.0.clone();
        if let Some(index) = items.iter().position(|existing| existing == item) {
            items.remove(index);
        }
        Self(items)
    }

    /// Returns true if an entry equal to `item` is present.
    pub fn contains(&self, item: &PricedProductItem) -> bool {
        self.0.contains(item)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over entries in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, PricedProductItem> {
        self.0.iter()
    }

    /// Returns the sum of quantities across all entries, saturating at `u32::MAX`.
    pub fn total_quantity(&self) -> u32 {
        self.0
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Returns the sum of `quantity * unit_price` across all entries.
    pub fn total_amount(&self) -> Money {
        self.0.iter().map(PricedProductItem::total_price).sum()
    }

    fn sorted(&self) -> Vec<PricedProductItem> {
        let mut items = self.0.clone();
        items.sort_unstable();
        items
    }
}

impl PartialEq for ProductItems {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.sorted() == other.sorted()
    }
}

impl Eq for ProductItems {}

impl FromIterator<PricedProductItem> for ProductItems {
    fn from_iter<I: IntoIterator<Item = PricedProductItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProductItems {
    type Item = &'a PricedProductItem;
    type IntoIter = std::slice::Iter<'a, PricedProductItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
