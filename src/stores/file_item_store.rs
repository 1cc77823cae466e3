use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::InternalError;
use crate::errors::internal::ItemStoreError;
use crate::stores::ItemStore;
use crate::stores::seed_catalog;
use crate::types::internal::{Item, ItemPatch, NewItem};

/// Item store backed by a pretty-printed JSON array on disk
///
/// Every mutation re-reads the whole file, applies the change and rewrites the file.
/// Mutations are serialized by `write_lock` for their whole read-modify-write cycle,
/// and the rewrite goes through a sibling temp file followed by a rename so readers
/// always see a complete file.
pub struct FileItemStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileItemStore {
    /// Open the store at `path`
    ///
    /// Creates the parent directory when missing and writes the demo catalog
    /// if the data file does not exist yet. An existing file is never reseeded.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InternalError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        store.ensure_parent_dir().await?;

        let exists = tokio::fs::try_exists(&store.path)
            .await
            .map_err(|e| InternalError::storage("check_data_file", e))?;

        if !exists {
            let items = seed_catalog::fresh_demo_items();
            store.write_items(&items).await?;
            tracing::info!(
                "Initialized data file {} with {} demo items",
                store.path.display(),
                items.len()
            );
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the demo catalog to the data file
    ///
    /// Without `force` an existing non-empty catalog is left alone.
    /// Returns whether the file was written.
    pub async fn seed(&self, force: bool) -> Result<bool, InternalError> {
        let _guard = self.write_lock.lock().await;

        if !force && !self.read_items().await?.is_empty() {
            tracing::info!("Data file {} already has items, not seeding", self.path.display());
            return Ok(false);
        }

        self.write_items(&seed_catalog::fresh_demo_items()).await?;
        tracing::info!("Seeded data file {}", self.path.display());

        Ok(true)
    }

    async fn ensure_parent_dir(&self) -> Result<(), InternalError> {
        match self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(dir) => tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| InternalError::storage("create_data_dir", e)),
            None => Ok(()),
        }
    }

    /// Read the full item list; a missing file reads as empty
    async fn read_items(&self) -> Result<Vec<Item>, InternalError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(InternalError::storage("read_items", e)),
        };

        serde_json::from_str(&contents).map_err(|e| InternalError::serialization("parse_items", e))
    }

    async fn write_items(&self, items: &[Item]) -> Result<(), InternalError> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| InternalError::serialization("encode_items", e))?;

        let tmp_path = self.temp_path();
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| InternalError::storage("write_items", e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| InternalError::storage("replace_data_file", e))?;

        tracing::debug!("Wrote {} items to {}", items.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    /// Run one read-modify-write cycle while holding the write lock
    ///
    /// The file is only rewritten when `change` succeeds.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Vec<Item>) -> Result<T, InternalError>,
    ) -> Result<T, InternalError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items().await?;
        let outcome = change(&mut items)?;
        self.write_items(&items).await?;

        Ok(outcome)
    }
}

fn position_of(items: &[Item], id: &str) -> Result<usize, InternalError> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| ItemStoreError::NotFound(id.to_string()).into())
}

#[async_trait]
impl ItemStore for FileItemStore {
    async fn list(&self) -> Result<Vec<Item>, InternalError> {
        self.read_items().await
    }

    async fn get(&self, id: &str) -> Result<Item, InternalError> {
        let items = self.read_items().await?;
        let index = position_of(&items, id)?;

        Ok(items[index].clone())
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, InternalError> {
        let item = new_item.into_item()?;

        let created = self
            .mutate(|items| {
                items.push(item.clone());
                Ok(item)
            })
            .await?;

        tracing::info!("Created item {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, InternalError> {
        let updated = self
            .mutate(|items| {
                let index = position_of(items, id)?;
                let updated = patch.apply(&items[index])?;
                items[index] = updated.clone();
                Ok(updated)
            })
            .await?;

        tracing::info!("Updated item {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<Item, InternalError> {
        let removed = self
            .mutate(|items| {
                let index = position_of(items, id)?;
                Ok(items.remove(index))
            })
            .await?;

        tracing::info!("Deleted item {}", id);
        Ok(removed)
    }
}
