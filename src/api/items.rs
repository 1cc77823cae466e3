use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};

use crate::app_data::AppData;
use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, ItemEnvelope, ItemListResponse, UpdateItemRequest,
};

/// Item catalog API endpoints
pub struct ItemsApi {
    item_store: Arc<dyn ItemStore>,
    expose_error_details: bool,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the store held in AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: Arc::clone(&app_data.item_store),
            expose_error_details: app_data.settings.expose_error_details(),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item catalog management
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every item in storage order together with the item count
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<ItemListResponse>, ItemError> {
        let items = self.item_store.list().await.map_err(|e| {
            ItemError::from_internal_error(e, "Failed to fetch items", self.expose_error_details)
        })?;

        tracing::debug!("Listing {} items", items.len());
        Ok(Json(ItemListResponse::new(items)))
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<ItemEnvelope>, ItemError> {
        let item = self.item_store.get(&id.0).await.map_err(|e| {
            ItemError::from_internal_error(e, "Failed to fetch item", self.expose_error_details)
        })?;

        Ok(Json(ItemEnvelope::new(item)))
    }

    /// Create a new item
    ///
    /// `name`, `description` and a positive `price` are required. `image` and
    /// `category` fall back to defaults when omitted.
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemApiResponse, ItemError> {
        let item = self.item_store.create(body.0.into()).await.map_err(|e| {
            ItemError::from_internal_error(e, "Failed to save item", self.expose_error_details)
        })?;

        Ok(CreateItemApiResponse::Created(Json(ItemEnvelope::with_message(
            item,
            "Item created successfully",
        ))))
    }

    /// Partially update an item
    ///
    /// Only supplied fields are changed; `updatedAt` is always refreshed
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<ItemEnvelope>, ItemError> {
        let item = self
            .item_store
            .update(&id.0, body.0.into())
            .await
            .map_err(|e| {
                ItemError::from_internal_error(e, "Failed to update item", self.expose_error_details)
            })?;

        Ok(Json(ItemEnvelope::with_message(item, "Item updated successfully")))
    }

    /// Delete an item and return it
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<ItemEnvelope>, ItemError> {
        let item = self.item_store.delete(&id.0).await.map_err(|e| {
            ItemError::from_internal_error(e, "Failed to delete item", self.expose_error_details)
        })?;

        Ok(Json(ItemEnvelope::with_message(item, "Item deleted successfully")))
    }
}
