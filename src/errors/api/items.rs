use crate::errors::internal::{InternalError, ItemStoreError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Missing or malformed item field
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// No item with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Storage failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a ValidationFailed error carrying the field message
    pub fn validation_failed(message: impl Into<String>) -> Self {
        ItemError::ValidationFailed(Json(ErrorResponse::new(message)))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorResponse::new("Item not found")))
    }

    /// Convert InternalError to ItemError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// `failure` is the operation-specific message (e.g. "Failed to save item").
    /// Infrastructure detail is attached only when `expose_details` is set.
    pub fn from_internal_error(err: InternalError, failure: &str, expose_details: bool) -> Self {
        match &err {
            InternalError::Validation(validation) => {
                tracing::debug!("Item validation failed on {}: {}", validation.field, validation);
                Self::validation_failed(validation.message.clone())
            }
            InternalError::Item(ItemStoreError::NotFound(id)) => {
                tracing::debug!("Item not found: {}", id);
                Self::not_found()
            }
            InternalError::Storage { operation, .. } | InternalError::Serialization { operation, .. } => {
                tracing::error!("Storage failure in {}: {}", operation, err);
                Self::internal_server_error(failure, expose_details.then(|| err.to_string()))
            }
            _ => {
                tracing::error!("Unexpected error in item operation: {}", err);
                Self::internal_server_error(failure, expose_details.then(|| err.to_string()))
            }
        }
    }

    fn internal_server_error(failure: &str, detail: Option<String>) -> Self {
        let message = detail.or_else(|| Some("Something went wrong".to_string()));
        ItemError::InternalError(Json(ErrorResponse::new(failure).with_message(message)))
    }

    /// Get the error envelope from the error variant
    pub fn body(&self) -> &ErrorResponse {
        match self {
            ItemError::ValidationFailed(json)
            | ItemError::NotFound(json)
            | ItemError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().error.clone()
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
