//! In-memory item storage implementation

use super::item::Item;

/// Items loaded into the store when running in test mode
const FIXTURE_ITEMS: [(&str, &str); 2] = [("garlic", "2.59"), ("candy", "1.99")];

/// In-memory ordered item collection
///
/// Lookups are linear scans; the collection is expected to stay small.
/// Insertion order is preserved and is the order returned by `items()`.
/// The store performs no uniqueness check on insert, callers own that rule.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create an empty store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        ItemStore {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create a store holding the given items, in order
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        ItemStore {
            items: items.into_iter().collect(),
        }
    }

    /// Create a store pre-seeded with the test fixtures
    pub fn seeded() -> Self {
        Self::from_items(
            FIXTURE_ITEMS
                .iter()
                .map(|(name, price)| Item::new(*name, *price)),
        )
    }

    /// Find the first item with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Check if an item with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Append an item to the end of the collection
    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Overwrite name and price of the matching item
    ///
    /// Returns the updated item, or None if no item has this name.
    pub fn update_in_place(&mut self, name: &str, patch: Item) -> Option<&Item> {
        let item = self.items.iter_mut().find(|item| item.name == name)?;
        item.name = patch.name;
        item.price = patch.price;
        Some(item)
    }

    /// Remove the first matching item and return it
    pub fn remove_by_name(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
