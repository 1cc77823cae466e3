use std::sync::Arc;

use poem::web::Redirect;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::providers::{AUTH_COOKIE_NAME, SessionProvider};

/// Page paths that require a session
pub const PROTECTED_PREFIXES: &[&str] = &["/add-item"];

/// Where unauthenticated navigation is sent
pub const LOGIN_PATH: &str = "/login";

/// Paths never inspected by the guard
const EXEMPT_PREFIXES: &[&str] = &["/api", "/swagger", "/_next/static", "/_next/image", "/favicon.ico"];

/// Middleware redirecting unauthenticated navigation away from protected pages
///
/// Requires `CookieJarManager` to run before it.
pub struct RouteGuard {
    session_provider: Arc<SessionProvider>,
}

impl RouteGuard {
    pub fn new(session_provider: Arc<SessionProvider>) -> Self {
        Self { session_provider }
    }
}

impl<E: Endpoint> Middleware<E> for RouteGuard {
    type Output = RouteGuardEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RouteGuardEndpoint {
            inner: ep,
            session_provider: Arc::clone(&self.session_provider),
        }
    }
}

pub struct RouteGuardEndpoint<E> {
    inner: E,
    session_provider: Arc<SessionProvider>,
}

impl<E: Endpoint> Endpoint for RouteGuardEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let path = req.uri().path().to_string();

        if is_protected(&path) {
            let token = req.cookie().get(AUTH_COOKIE_NAME);
            let token = token.as_ref().map(|cookie| cookie.value_str());

            if !self.session_provider.is_authenticated(token) {
                let location = login_redirect(&path);
                tracing::debug!("Redirecting unauthenticated request for {} to {}", path, location);
                return Ok(Redirect::temporary(location).into_response());
            }
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// Whether navigation to `path` needs a session
pub fn is_protected(path: &str) -> bool {
    if EXEMPT_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return false;
    }

    PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Login URL carrying the original path in the `redirect` query parameter
pub fn login_redirect(path: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, encode_query_value(path))
}

fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '&' => encoded.push_str("%26"),
            '+' => encoded.push_str("%2B"),
            '=' => encoded.push_str("%3D"),
            '#' => encoded.push_str("%23"),
            ' ' => encoded.push_str("%20"),
            c => encoded.push(c),
        }
    }
    encoded
}
