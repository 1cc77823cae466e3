use crate::types::internal::AuthUser;

/// Capability to check an email/password pair
///
/// Call sites only depend on this trait so a real user store can replace the
/// built-in single account.
pub trait CredentialVerifier: Send + Sync {
    /// The user owning the credentials, or `None` when they are not accepted
    fn verify(&self, email: &str, password: &str) -> Option<AuthUser>;
}

/// Single hardcoded account compared by exact string equality
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    user: AuthUser,
}

impl StaticCredentialVerifier {
    pub fn new(email: &str, password: &str, name: &str, role: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            user: AuthUser {
                email: email.to_string(),
                name: name.to_string(),
                role: role.to_string(),
            },
        }
    }

    /// The demo account: admin@itemstore.com / admin123
    pub fn mock_user() -> Self {
        Self::new("admin@itemstore.com", "admin123", "Admin User", "admin")
    }

    /// Profile of the configured account
    pub fn user(&self) -> &AuthUser {
        &self.user
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Option<AuthUser> {
        (email == self.email && password == self.password).then(|| self.user.clone())
    }
}
