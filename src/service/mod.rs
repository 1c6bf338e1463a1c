//! Item service
//!
//! Request-level operations over the shared item store. Each operation
//! validates its input, takes the store lock once, and returns either the
//! affected item or an `ItemError`.

mod error;
mod input;

pub use error::{ErrorBody, ItemError, ItemResult};
pub use input::ItemPayload;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::store::{Item, ItemStore};

/// Item service
///
/// Cloning is cheap and every clone works on the same store.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<RwLock<ItemStore>>,
}

impl ItemService {
    /// Create a service owning the given store
    pub fn new(store: ItemStore) -> Self {
        ItemService {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// All items in insertion order
    pub async fn list_items(&self) -> Vec<Item> {
        self.store.read().await.items().to_vec()
    }

    /// Number of live items
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Get an item by name
    #[instrument(skip(self))]
    pub async fn get_item(&self, name: &str) -> ItemResult<Item> {
        self.store
            .read()
            .await
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| ItemError::NotFound(name.to_string()))
    }

    /// Create a new item
    ///
    /// The body is validated before the store is touched.
    #[instrument(skip(self, payload))]
    pub async fn create_item(&self, payload: ItemPayload) -> ItemResult<Item> {
        let item = payload.into_item().inspect_err(|_| {
            debug!("Rejected create: missing name or price");
        })?;

        let mut store = self.store.write().await;
        if store.contains(&item.name) {
            warn!("Rejected create: item '{}' already exists", item.name);
            return Err(ItemError::DuplicateName(item.name));
        }

        store.insert(item.clone());
        debug!("Added item '{}'", item.name);
        Ok(item)
    }

    /// Overwrite an existing item with the body's name and price
    ///
    /// The body is validated first, then the target must exist. Renaming
    /// onto another item's name is rejected.
    #[instrument(skip(self, payload))]
    pub async fn update_item(&self, name: &str, payload: ItemPayload) -> ItemResult<Item> {
        let patch = payload.into_item().inspect_err(|_| {
            debug!("Rejected update of '{}': missing name or price", name);
        })?;

        let mut store = self.store.write().await;
        if !store.contains(name) {
            return Err(ItemError::NotFound(name.to_string()));
        }
        if patch.name != name && store.contains(&patch.name) {
            warn!("Rejected rename of '{}': '{}' already exists", name, patch.name);
            return Err(ItemError::DuplicateName(patch.name));
        }

        let updated = store
            .update_in_place(name, patch)
            .cloned()
            .ok_or_else(|| ItemError::NotFound(name.to_string()))?;
        debug!("Updated item '{}' -> '{}'", name, updated.name);
        Ok(updated)
    }

    /// Delete an item by name, returning the removed item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, name: &str) -> ItemResult<Item> {
        let removed = self
            .store
            .write()
            .await
            .remove_by_name(name)
            .ok_or_else(|| ItemError::NotFound(name.to_string()))?;
        debug!("Deleted item '{}'", removed.name);
        Ok(removed)
    }

    /// Replace the whole collection, e.g. between test runs
    pub async fn reset(&self, store: ItemStore) {
        *self.store.write().await = store;
    }
}
