// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use itemstore_backend::AppData;
use itemstore_backend::api::build_app;
use itemstore_backend::config::{Environment, ServerSettings};
use itemstore_backend::stores::{FileItemStore, MemoryItemStore};
use poem::endpoint::BoxEndpoint;
use poem::test::{TestClient, TestResponse};
use tempfile::TempDir;

pub const ADMIN_EMAIL: &str = "admin@itemstore.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const SESSION_COOKIE: &str = "auth-token=authenticated-user-token";

/// Settings pointing at a temp directory, development mode so 500s carry detail
pub fn test_settings(dir: &TempDir) -> ServerSettings {
    ServerSettings::default()
        .with_environment(Environment::Development)
        .with_data_file(dir.path().join("data").join("items.json"))
        .with_frontend_dir(dir.path().join("public"))
}

/// Test client over a seeded in-memory store
///
/// The TempDir must be kept alive for the duration of the test.
pub fn memory_client() -> (TestClient<BoxEndpoint<'static>>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let app_data = AppData::with_item_store(test_settings(&dir), Arc::new(MemoryItemStore::seeded()));

    (TestClient::new(build_app(Arc::new(app_data))), dir)
}

/// Test client over a file store whose data file starts empty
pub async fn file_client() -> (TestClient<BoxEndpoint<'static>>, TempDir, Arc<FileItemStore>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = test_settings(&dir);

    let data_file = settings.data_file().to_path_buf();
    tokio::fs::create_dir_all(data_file.parent().expect("data file has a parent"))
        .await
        .expect("Failed to create data dir");
    tokio::fs::write(&data_file, "[]")
        .await
        .expect("Failed to write empty data file");

    let store = Arc::new(
        FileItemStore::open(&data_file)
            .await
            .expect("Failed to open file store"),
    );
    let app_data = AppData::with_item_store(settings, store.clone());

    (TestClient::new(build_app(Arc::new(app_data))), dir, store)
}

/// Decode a response body as JSON
pub async fn body_json(resp: TestResponse) -> serde_json::Value {
    resp.0
        .into_body()
        .into_json()
        .await
        .expect("Response body is not JSON")
}
