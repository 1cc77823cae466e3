// Stores layer - Item persistence
pub mod file_item_store;
pub mod item_store;
pub mod memory_item_store;
pub mod seed_catalog;

pub use file_item_store::FileItemStore;
pub use item_store::ItemStore;
pub use memory_item_store::MemoryItemStore;
