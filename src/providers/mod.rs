// Providers layer - Work performers
//
// Providers perform the actual auth work (credential checks, session cookies)
// that coordinators orchestrate for the API layer.

pub mod credential_provider;
pub mod session_provider;

// Re-export providers for clean imports
pub use credential_provider::{CredentialVerifier, StaticCredentialVerifier};
pub use session_provider::{AUTH_COOKIE_NAME, SESSION_TOKEN, SessionProvider};
