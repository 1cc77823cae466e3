use std::sync::Arc;

use crate::config::{ServerSettings, StorageBackend};
use crate::errors::InternalError;
use crate::providers::{CredentialVerifier, SessionProvider, StaticCredentialVerifier};
use crate::stores::{FileItemStore, ItemStore, MemoryItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once at startup and shared with the API
/// layer and coordinators. Nothing lives in process globals.
///
/// # Architecture
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   ├─ settings (Arc<ServerSettings>)
///   ├─ item_store (Arc<dyn ItemStore>)  file or memory, per STORAGE_BACKEND
///   ├─ credential_verifier (Arc<dyn CredentialVerifier>)
///   └─ session_provider (Arc<SessionProvider>)
///   ↓ wrapped in Arc<AppData>
///   ├─ ItemsApi::new(app_data)
///   └─ AuthApi::new(app_data) → AuthCoordinator
/// ```
pub struct AppData {
    pub settings: Arc<ServerSettings>,
    pub item_store: Arc<dyn ItemStore>,
    pub credential_verifier: Arc<dyn CredentialVerifier>,
    pub session_provider: Arc<SessionProvider>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the data file cannot be created or seeded
    pub async fn init(settings: ServerSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let item_store: Arc<dyn ItemStore> = match settings.storage_backend() {
            StorageBackend::File => {
                tracing::debug!("Opening file item store at {}", settings.data_file().display());
                Arc::new(FileItemStore::open(settings.data_file()).await?)
            }
            StorageBackend::Memory => {
                tracing::debug!("Using in-memory item store");
                Arc::new(MemoryItemStore::seeded())
            }
        };

        let app_data = Self::with_item_store(settings, item_store);
        tracing::info!("AppData initialization complete");

        Ok(app_data)
    }

    /// Assemble AppData around an already constructed item store
    pub fn with_item_store(settings: ServerSettings, item_store: Arc<dyn ItemStore>) -> Self {
        let verifier = StaticCredentialVerifier::mock_user();
        let session_provider = Arc::new(SessionProvider::new(
            verifier.user().clone(),
            settings.secure_cookies(),
        ));

        Self {
            settings: Arc::new(settings),
            item_store,
            credential_verifier: Arc::new(verifier),
            session_provider,
        }
    }
}
