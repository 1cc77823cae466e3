// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::ServerSettings;
use crate::stores::MemoryItemStore;

/// AppData over a seeded in-memory store with default settings
pub fn memory_app_data() -> Arc<AppData> {
    memory_app_data_with(ServerSettings::default())
}

/// AppData over a seeded in-memory store with the given settings
pub fn memory_app_data_with(settings: ServerSettings) -> Arc<AppData> {
    Arc::new(AppData::with_item_store(
        settings,
        Arc::new(MemoryItemStore::seeded()),
    ))
}
