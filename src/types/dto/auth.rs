use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::types::internal::AuthUser;

/// Request model for user login
#[derive(Object, Debug, Default)]
pub struct LoginRequest {
    /// Email for authentication
    pub email: Option<String>,

    /// Password for authentication
    pub password: Option<String>,
}

/// Public profile of the signed-in user
#[derive(Object, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<AuthUser> for UserResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

/// Response model for a successful login
#[derive(Object, Debug)]
pub struct LoginResponse {
    pub success: bool,

    pub message: String,

    /// The user the session belongs to
    pub user: UserResponse,
}

/// Response model for the session status check
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub success: bool,

    /// Whether the request carried a valid session cookie
    pub is_authenticated: bool,

    /// The session user, null when not authenticated
    pub user: Option<UserResponse>,
}

/// Response model for logout
#[derive(Object, Debug)]
pub struct LogoutResponse {
    pub success: bool,

    pub message: String,
}

/// API response for login endpoint
#[derive(ApiResponse)]
pub enum LoginApiResponse {
    /// Authentication successful, session cookie set
    #[oai(status = 200)]
    Ok(Json<LoginResponse>, #[oai(header = "Set-Cookie")] String),
}

/// API response for logout endpoint
#[derive(ApiResponse)]
pub enum LogoutApiResponse {
    /// Session cookie cleared
    #[oai(status = 200)]
    Ok(Json<LogoutResponse>, #[oai(header = "Set-Cookie")] String),
}
