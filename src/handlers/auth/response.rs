//! Authentication response DTOs

use serde::Serialize;

use crate::models::UserRole;

/// Successful login: the reduced user projection plus an access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Current user response (for /me endpoint)
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: i32,
    pub email: String,
    pub role: UserRole,
}
