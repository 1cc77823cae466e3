use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Cookie, payload::Json};

use crate::app_data::AppData;
use crate::coordinators::AuthCoordinator;
use crate::errors::AuthError;
use crate::types::dto::auth::{
    AuthStatusResponse, LoginApiResponse, LoginRequest, LoginResponse, LogoutApiResponse,
    LogoutResponse,
};

/// Authentication API endpoints
pub struct AuthApi {
    auth_coordinator: Arc<AuthCoordinator>,
}

impl AuthApi {
    /// Create a new AuthApi with its coordinator built from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_coordinator: Arc::new(AuthCoordinator::new(app_data)),
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password
    ///
    /// Sets the `auth-token` session cookie (7 days, HttpOnly, SameSite=Lax) on success
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<LoginApiResponse, AuthError> {
        let outcome = self
            .auth_coordinator
            .login(body.email.as_deref(), body.password.as_deref())
            .map_err(AuthError::from_internal_error)?;

        Ok(LoginApiResponse::Ok(
            Json(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                user: outcome.user.into(),
            }),
            outcome.cookie,
        ))
    }

    /// Report whether the request carries a valid session cookie
    #[oai(path = "/status", method = "get", tag = "AuthTags::Authentication")]
    async fn status(
        &self,
        #[oai(name = "auth-token")] auth_token: Cookie<Option<String>>,
    ) -> Json<AuthStatusResponse> {
        let user = self.auth_coordinator.status(auth_token.0.as_deref());

        Json(AuthStatusResponse {
            success: true,
            is_authenticated: user.is_some(),
            user: user.map(Into::into),
        })
    }

    /// Clear the session cookie
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self) -> LogoutApiResponse {
        LogoutApiResponse::Ok(
            Json(LogoutResponse {
                success: true,
                message: "Logout successful".to_string(),
            }),
            self.auth_coordinator.logout(),
        )
    }
}
