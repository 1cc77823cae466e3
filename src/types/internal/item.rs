use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::internal::ValidationError;

/// Image used when an item is created without one
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

/// Category used when an item is created without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Catalog record as held by the item stores
///
/// Serialized with camelCase keys, which is also the layout of the JSON data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Current time in the timestamp format used for `createdAt` / `updatedAt`
///
/// RFC 3339, UTC, millisecond precision, `Z` suffix (e.g. `2026-01-12T17:38:55.116Z`).
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A submitted text field before type checking
///
/// Request bodies are JSON, so a text field may arrive as a number, bool, array
/// or object. Those are kept as `NotText` and rejected by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput {
    Text(String),
    NotText,
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated fields submitted for a new item
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: Option<TextInput>,
    pub description: Option<TextInput>,
    pub price: Option<f64>,
    pub image: Option<TextInput>,
    pub category: Option<TextInput>,
}

impl NewItem {
    /// Validate the submitted fields and build the record to store
    ///
    /// Checks run in order name, description, price; the first failure is returned.
    /// On success the item gets a fresh UUID, `createdAt = now`, `inStock = true`,
    /// and defaults for a missing or blank image and category.
    pub fn into_item(self) -> Result<Item, ValidationError> {
        let name = required_text(self.name.as_ref()).ok_or_else(|| {
            ValidationError::new("name", "Name is required and must be a non-empty string")
        })?;

        let description = required_text(self.description.as_ref()).ok_or_else(|| {
            ValidationError::new(
                "description",
                "Description is required and must be a non-empty string",
            )
        })?;

        let price = self
            .price
            .filter(|price| is_positive_price(*price))
            .ok_or_else(|| {
                ValidationError::new("price", "Price is required and must be a positive number")
            })?;

        let image = optional_text(self.image.as_ref(), "image", "Image must be a string")?
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
        let category = optional_text(self.category.as_ref(), "category", "Category must be a string")?
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Item {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price,
            image,
            category,
            in_stock: true,
            created_at: timestamp_now(),
            updated_at: None,
        })
    }
}

/// Partial update for an existing item
///
/// A string field is applied only when it is non-empty, `price` only when it is non-zero,
/// and `in_stock` whenever it is present.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<TextInput>,
    pub description: Option<TextInput>,
    pub price: Option<f64>,
    pub image: Option<TextInput>,
    pub category: Option<TextInput>,
    pub in_stock: Option<bool>,
}

impl ItemPatch {
    /// Merge this patch onto `item`, returning the updated copy
    ///
    /// The original is left untouched so a failed validation never reaches storage.
    /// `updatedAt` is always refreshed, even when no field changes.
    pub fn apply(&self, item: &Item) -> Result<Item, ValidationError> {
        let mut updated = item.clone();

        if let Some(name) = supplied_text(self.name.as_ref()) {
            updated.name = required_text(Some(name))
                .ok_or_else(|| ValidationError::new("name", "Name must be a non-empty string"))?;
        }

        if let Some(description) = supplied_text(self.description.as_ref()) {
            updated.description = required_text(Some(description)).ok_or_else(|| {
                ValidationError::new("description", "Description must be a non-empty string")
            })?;
        }

        if let Some(price) = self.price.filter(|price| *price != 0.0) {
            if !is_positive_price(price) {
                return Err(ValidationError::new("price", "Price must be a positive number"));
            }
            updated.price = price;
        }

        if let Some(image) = optional_text(self.image.as_ref(), "image", "Image must be a string")? {
            updated.image = image;
        }

        if let Some(category) =
            optional_text(self.category.as_ref(), "category", "Category must be a string")?
        {
            updated.category = category;
        }

        if let Some(in_stock) = self.in_stock {
            updated.in_stock = in_stock;
        }

        updated.updated_at = Some(timestamp_now());

        Ok(updated)
    }
}

/// Drops empty strings, which an update treats as "not supplied"
fn supplied_text(value: Option<&TextInput>) -> Option<&TextInput> {
    value.filter(|v| !matches!(v, TextInput::Text(text) if text.is_empty()))
}

/// Trimmed non-empty text, `None` for anything else
fn required_text(value: Option<&TextInput>) -> Option<String> {
    match value {
        Some(TextInput::Text(text)) => Some(text.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Trimmed non-empty text; blank or absent is `None`, a non-string is an error
fn optional_text(
    value: Option<&TextInput>,
    field: &'static str,
    message: &str,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(TextInput::NotText) => Err(ValidationError::new(field, message)),
        other => Ok(required_text(other)),
    }
}

fn is_positive_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewItem {
        NewItem {
            name: Some("Widget".into()),
            description: Some("A widget".into()),
            price: Some(9.99),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_item_applies_defaults() {
        let item = widget().into_item().unwrap();

        assert!(Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description, "A widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.image, DEFAULT_IMAGE_URL);
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert!(item.in_stock);
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_new_item_trims_text_fields() {
        let item = NewItem {
            name: Some("  Widget ".into()),
            description: Some("\tA widget\n".into()),
            image: Some(" https://example.com/w.png ".into()),
            category: Some(" Tools ".into()),
            ..widget()
        }
        .into_item()
        .unwrap();

        assert_eq!(item.name, "Widget");
        assert_eq!(item.description, "A widget");
        assert_eq!(item.image, "https://example.com/w.png");
        assert_eq!(item.category, "Tools");
    }

    #[test]
    fn test_new_item_blank_image_falls_back_to_default() {
        let item = NewItem {
            image: Some("   ".into()),
            category: Some("".into()),
            ..widget()
        }
        .into_item()
        .unwrap();

        assert_eq!(item.image, DEFAULT_IMAGE_URL);
        assert_eq!(item.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_new_item_missing_name_is_rejected() {
        let err = NewItem { name: None, ..widget() }.into_item().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_new_item_whitespace_description_is_rejected() {
        let err = NewItem {
            description: Some("   ".into()),
            ..widget()
        }
        .into_item()
        .unwrap_err();
        assert_eq!(err.field, "description");
    }

    #[test]
    fn test_new_item_zero_and_negative_price_are_rejected() {
        for price in [Some(0.0), Some(-1.5), None] {
            let err = NewItem { price, ..widget() }.into_item().unwrap_err();
            assert_eq!(err.field, "price");
            assert_eq!(err.message, "Price is required and must be a positive number");
        }
    }

    #[test]
    fn test_new_item_non_text_fields_are_rejected() {
        let err = NewItem {
            name: Some(TextInput::NotText),
            ..widget()
        }
        .into_item()
        .unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Name is required and must be a non-empty string");

        let err = NewItem {
            description: Some(TextInput::NotText),
            ..widget()
        }
        .into_item()
        .unwrap_err();
        assert_eq!(err.field, "description");

        let err = NewItem {
            category: Some(TextInput::NotText),
            ..widget()
        }
        .into_item()
        .unwrap_err();
        assert_eq!(err.field, "category");
        assert_eq!(err.message, "Category must be a string");
    }

    #[test]
    fn test_new_item_reports_first_failing_field() {
        let err = NewItem::default().into_item().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_patch_price_only_keeps_other_fields() {
        let item = widget().into_item().unwrap();
        let patch = ItemPatch {
            price: Some(19.5),
            ..Default::default()
        };

        let updated = patch.apply(&item).unwrap();

        assert_eq!(updated.price, 19.5);
        assert_eq!(updated.name, item.name);
        assert_eq!(updated.description, item.description);
        assert_eq!(updated.created_at, item.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_patch_ignores_empty_strings_and_zero_price() {
        let item = widget().into_item().unwrap();
        let patch = ItemPatch {
            name: Some("".into()),
            image: Some("".into()),
            price: Some(0.0),
            ..Default::default()
        };

        let updated = patch.apply(&item).unwrap();

        assert_eq!(updated.name, item.name);
        assert_eq!(updated.image, item.image);
        assert_eq!(updated.price, item.price);
    }

    #[test]
    fn test_patch_whitespace_name_is_rejected() {
        let item = widget().into_item().unwrap();
        let patch = ItemPatch {
            name: Some("   ".into()),
            ..Default::default()
        };

        let err = patch.apply(&item).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_patch_negative_price_is_rejected() {
        let item = widget().into_item().unwrap();
        let patch = ItemPatch {
            price: Some(-3.0),
            ..Default::default()
        };

        assert_eq!(patch.apply(&item).unwrap_err().field, "price");
    }

    #[test]
    fn test_patch_non_text_name_is_rejected() {
        let item = widget().into_item().unwrap();

        let err = ItemPatch {
            name: Some(TextInput::NotText),
            ..Default::default()
        }
        .apply(&item)
        .unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Name must be a non-empty string");

        let err = ItemPatch {
            image: Some(TextInput::NotText),
            ..Default::default()
        }
        .apply(&item)
        .unwrap_err();
        assert_eq!(err.field, "image");
    }

    #[test]
    fn test_patch_sets_stock_flag() {
        let item = widget().into_item().unwrap();
        let patch = ItemPatch {
            in_stock: Some(false),
            category: Some(" Outdoor ".into()),
            ..Default::default()
        };

        let updated = patch.apply(&item).unwrap();
        assert!(!updated.in_stock);
        assert_eq!(updated.category, "Outdoor");
    }

    #[test]
    fn test_item_json_uses_camel_case_and_omits_missing_updated_at() {
        let item = widget().into_item().unwrap();
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["inStock"], serde_json::json!(true));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        // 2026-01-12T17:38:55.116Z
        assert_eq!(ts.len(), 24);
    }
}
