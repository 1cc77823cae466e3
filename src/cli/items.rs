use std::path::Path;

use crate::errors::InternalError;
use crate::stores::{FileItemStore, ItemStore};

/// Write the demo catalog to the data file
///
/// A missing file is created and seeded by opening the store; an existing file
/// with items is only replaced when `force` is set.
pub async fn seed_items(data_file: &Path, force: bool) -> Result<(), InternalError> {
    let store = FileItemStore::open(data_file).await?;

    if store.seed(force).await? {
        println!("Seeded {} with the demo catalog", data_file.display());
    } else {
        println!(
            "{} already contains items, use --force to overwrite",
            data_file.display()
        );
    }

    Ok(())
}

/// Print the stored items as pretty JSON
pub async fn list_items(data_file: &Path) -> Result<(), InternalError> {
    let store = FileItemStore::open(data_file).await?;
    let items = store.list().await?;

    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| InternalError::serialization("encode_items", e))?;
    println!("{}", json);

    Ok(())
}
