//! Authentication handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::AuthService,
    state::AppState,
};

use super::{
    request::LoginRequest,
    response::{AuthResponse, CurrentUserResponse},
};

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let response = AuthService::login(
        state.db(),
        state.jwt(),
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(Json(response))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::current_user(state.db(), auth_user.user_id).await?;
    Ok(Json(user))
}
