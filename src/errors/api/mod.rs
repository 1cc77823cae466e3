// API-facing error types
pub mod auth;
pub mod items;

// Re-exports for convenience
pub use auth::AuthError;
pub use items::ItemError;


#[cfg(test)]
mod items_test;
