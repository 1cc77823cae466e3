use async_trait::async_trait;

use crate::errors::InternalError;
use crate::types::internal::{Item, ItemPatch, NewItem};

/// Storage contract shared by the file-backed and in-memory item stores
///
/// Every operation either succeeds completely or leaves storage untouched.
/// Lookups are by exact identifier equality; `list` preserves storage order.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in storage order
    async fn list(&self) -> Result<Vec<Item>, InternalError>;

    /// Item with the given id
    ///
    /// # Errors
    /// `ItemStoreError::NotFound` when no item has this id
    async fn get(&self, id: &str) -> Result<Item, InternalError>;

    /// Validate, default and append a new item
    ///
    /// # Errors
    /// `ValidationError` naming the first invalid field; nothing is appended
    async fn create(&self, new_item: NewItem) -> Result<Item, InternalError>;

    /// Merge a partial update onto an existing item and refresh `updatedAt`
    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, InternalError>;

    /// Remove an item and return it
    async fn delete(&self, id: &str) -> Result<Item, InternalError>;
}
