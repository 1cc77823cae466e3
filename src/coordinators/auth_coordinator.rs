use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::providers::{CredentialVerifier, SessionProvider};
use crate::types::internal::AuthUser;

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: AuthUser,
    /// `Set-Cookie` value opening the session
    pub cookie: String,
}

/// Orchestrates login, session status and logout
///
/// Credential checks go through `CredentialVerifier`, cookie handling through
/// `SessionProvider`.
pub struct AuthCoordinator {
    credential_verifier: Arc<dyn CredentialVerifier>,
    session_provider: Arc<SessionProvider>,
}

impl AuthCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            credential_verifier: Arc::clone(&app_data.credential_verifier),
            session_provider: Arc::clone(&app_data.session_provider),
        }
    }

    /// Check credentials and issue the session cookie
    ///
    /// # Errors
    /// * `CredentialError::MissingCredentials` - email or password absent or empty
    /// * `CredentialError::InvalidCredentials` - pair not accepted
    pub fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<LoginOutcome, InternalError> {
        let (email, password) = match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(CredentialError::MissingCredentials.into()),
        };

        let user = self
            .credential_verifier
            .verify(email, password)
            .ok_or(CredentialError::InvalidCredentials)?;

        tracing::info!("User {} logged in", user.email);

        Ok(LoginOutcome {
            user,
            cookie: self.session_provider.session_cookie(),
        })
    }

    /// The session user for a cookie value, `None` when not signed in
    pub fn status(&self, token: Option<&str>) -> Option<AuthUser> {
        self.session_provider.user_for_token(token)
    }

    /// `Set-Cookie` value clearing the session
    pub fn logout(&self) -> String {
        tracing::debug!("Clearing session cookie");
        self.session_provider.removal_cookie()
    }
}
