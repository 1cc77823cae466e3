use std::time::Duration;

use poem::web::cookie::{Cookie, SameSite};

use crate::types::internal::AuthUser;

/// Name of the session cookie
pub const AUTH_COOKIE_NAME: &str = "auth-token";

/// The one opaque value that marks a request as signed in
pub const SESSION_TOKEN: &str = "authenticated-user-token";

/// Session cookie lifetime (7 days)
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 7);

/// Issues and recognises the static session cookie
///
/// There is no session table: a request is authenticated iff its cookie value
/// equals the configured token. Expiry is left to the cookie's max-age.
pub struct SessionProvider {
    token: String,
    user: AuthUser,
    secure: bool,
}

impl SessionProvider {
    pub fn new(user: AuthUser, secure: bool) -> Self {
        Self {
            token: SESSION_TOKEN.to_string(),
            user,
            secure,
        }
    }

    /// `Set-Cookie` value that opens a session
    pub fn session_cookie(&self) -> String {
        self.build_cookie(&self.token, SESSION_MAX_AGE)
    }

    /// `Set-Cookie` value that clears the session cookie
    pub fn removal_cookie(&self) -> String {
        self.build_cookie("", Duration::ZERO)
    }

    fn build_cookie(&self, value: &str, max_age: Duration) -> String {
        let mut cookie = Cookie::new_with_str(AUTH_COOKIE_NAME, value);
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(max_age);
        cookie.set_secure(self.secure);
        cookie.to_string()
    }

    /// Whether a cookie value is the session token
    pub fn is_authenticated(&self, token: Option<&str>) -> bool {
        token == Some(self.token.as_str())
    }

    /// The session user for a cookie value
    pub fn user_for_token(&self, token: Option<&str>) -> Option<AuthUser> {
        self.is_authenticated(token).then(|| self.user.clone())
    }
}
