use poem_openapi::{ApiResponse, Object, payload::Json, types::Any};
use serde_json::Value;

use crate::types::internal::{Item, ItemPatch, NewItem, TextInput};

/// Request model for creating a new item
///
/// Every field is optional at the schema level so that missing, blank or
/// mistyped values reach validation and come back as a field-specific 400.
/// Text fields accept any JSON value for the same reason.
#[derive(Object, Debug, Default)]
pub struct CreateItemRequest {
    /// Name of the item (required, non-empty string)
    pub name: Option<Any<Value>>,

    /// Description of the item (required, non-empty string)
    pub description: Option<Any<Value>>,

    /// Price of the item (required, positive)
    pub price: Option<f64>,

    /// Image URL, a placeholder is used when omitted
    pub image: Option<Any<Value>>,

    /// Category, "General" when omitted
    pub category: Option<Any<Value>>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: text_input(req.name),
            description: text_input(req.description),
            price: req.price,
            image: text_input(req.image),
            category: text_input(req.category),
        }
    }
}

/// Request model for a partial item update
#[derive(Object, Debug, Default)]
#[oai(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<Any<Value>>,
    pub description: Option<Any<Value>>,
    pub price: Option<f64>,
    pub image: Option<Any<Value>>,
    pub category: Option<Any<Value>>,
    pub in_stock: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: text_input(req.name),
            description: text_input(req.description),
            price: req.price,
            image: text_input(req.image),
            category: text_input(req.category),
            in_stock: req.in_stock,
        }
    }
}

fn text_input(value: Option<Any<Value>>) -> Option<TextInput> {
    match value.map(|Any(value)| value) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(TextInput::Text(text)),
        Some(_) => Some(TextInput::NotText),
    }
}

/// Response model representing an item
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,

    /// Price of the item
    pub price: f64,

    /// Image URL
    pub image: String,

    /// Category of the item
    pub category: String,

    /// Whether the item is in stock
    pub in_stock: bool,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,

    /// Timestamp of the last update (ISO 8601 format), absent if never updated
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            category: item.category,
            in_stock: item.in_stock,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Envelope for the item listing
#[derive(Object, Debug)]
pub struct ItemListResponse {
    pub success: bool,

    /// All items in storage order
    pub data: Vec<ItemResponse>,

    /// Number of items in `data`
    pub count: u64,
}

impl ItemListResponse {
    pub fn new(items: Vec<Item>) -> Self {
        let data: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
        Self {
            success: true,
            count: data.len() as u64,
            data,
        }
    }
}

/// Envelope for a single item
#[derive(Object, Debug)]
pub struct ItemEnvelope {
    pub success: bool,

    pub data: ItemResponse,

    /// Outcome message for mutating operations
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl ItemEnvelope {
    pub fn new(item: Item) -> Self {
        Self {
            success: true,
            data: item.into(),
            message: None,
        }
    }

    pub fn with_message(item: Item, message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::new(item)
        }
    }
}

/// API response for item creation
#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<ItemEnvelope>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_fields_keep_strings_and_flag_other_json() {
        let req = CreateItemRequest {
            name: Some(Any(json!(123))),
            description: Some(Any(json!("A widget"))),
            price: Some(9.99),
            image: Some(Any(Value::Null)),
            category: Some(Any(json!(["Tools"]))),
        };

        let new_item = NewItem::from(req);

        assert_eq!(new_item.name, Some(TextInput::NotText));
        assert_eq!(new_item.description, Some(TextInput::from("A widget")));
        assert_eq!(new_item.image, None);
        assert_eq!(new_item.category, Some(TextInput::NotText));
    }

    #[test]
    fn test_update_request_maps_booleans_as_non_text() {
        let req = UpdateItemRequest {
            name: Some(Any(json!(true))),
            in_stock: Some(false),
            ..Default::default()
        };

        let patch = ItemPatch::from(req);

        assert_eq!(patch.name, Some(TextInput::NotText));
        assert_eq!(patch.in_stock, Some(false));
        assert!(patch.description.is_none());
    }
}
