use thiserror::Error;

/// Internal error type for store and provider operations
///
/// Separates infrastructure errors (Storage, Serialization) from domain errors
/// (Validation, Item, Credential).
///
/// This error type is NOT exposed via API. API endpoints must explicitly
/// convert these to ItemError or AuthError.
#[derive(Error, Debug)]
pub enum InternalError {
    // ============================================================
    // Infrastructure Errors
    // ============================================================

    /// Reading or writing the data file failed
    #[error("Storage error: {operation} failed: {source}")]
    Storage {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be encoded or decoded
    #[error("Serialization error: {operation} failed: {source}")]
    Serialization {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================
    // Domain Errors
    // ============================================================

    /// Submitted item fields failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Item store errors
    #[error(transparent)]
    Item(#[from] ItemStoreError),

    /// Credential check errors
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl InternalError {
    /// Create a storage error with context
    pub fn storage(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            operation: operation.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            operation: operation.into(),
            source,
        }
    }

    /// Whether this is an infrastructure failure rather than a caller mistake
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Serialization { .. })
    }
}

/// A submitted field violated an item invariant
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: &'static str,

    /// Message returned to the client
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Item store specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemStoreError {
    /// No item with this id
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// Credential check specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CredentialError {
    /// Email or password missing from the login request
    #[error("Email and password are required")]
    MissingCredentials,

    /// Email/password pair not accepted
    #[error("Invalid credentials")]
    InvalidCredentials,
}
