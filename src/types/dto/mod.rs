// Request and response models exposed through the OpenAPI service
pub mod auth;
pub mod common;
pub mod items;
