// Internal domain types shared by stores, providers and the API layer
pub mod auth;
pub mod item;

pub use auth::AuthUser;
pub use item::{Item, ItemPatch, NewItem, TextInput};
