use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::errors::InternalError;
use crate::errors::internal::ItemStoreError;
use crate::stores::ItemStore;
use crate::stores::seed_catalog;
use crate::types::internal::{Item, ItemPatch, NewItem};

/// Process-lifetime item store
///
/// Items live in an insertion-ordered map keyed by id and are lost on restart.
pub struct MemoryItemStore {
    items: RwLock<IndexMap<String, Item>>,
}

impl MemoryItemStore {
    /// Empty store
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store pre-populated with the demo catalog
    pub fn seeded() -> Self {
        Self::with_items(seed_catalog::demo_items())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, InternalError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Item, InternalError> {
        self.items
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ItemStoreError::NotFound(id.to_string()).into())
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, InternalError> {
        let item = new_item.into_item()?;

        self.items.write().await.insert(item.id.clone(), item.clone());
        tracing::debug!("Created item {} in memory store", item.id);

        Ok(item)
    }

    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, InternalError> {
        let mut items = self.items.write().await;

        let existing = items
            .get_mut(id)
            .ok_or_else(|| ItemStoreError::NotFound(id.to_string()))?;

        let updated = patch.apply(existing)?;
        *existing = updated.clone();
        tracing::debug!("Updated item {} in memory store", id);

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<Item, InternalError> {
        let removed = self
            .items
            .write()
            .await
            .shift_remove(id)
            .ok_or_else(|| ItemStoreError::NotFound(id.to_string()))?;
        tracing::debug!("Deleted item {} from memory store", id);

        Ok(removed)
    }
}
