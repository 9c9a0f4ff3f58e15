//! User handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::UserService, state::AppState,
    utils::MultipartForm,
};

use super::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::UserResponse,
};

/// List users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let (offset, limit) = query.window();
    let users = UserService::list_users(state.db(), offset, limit).await?;
    Ok(Json(users))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;

    let user = UserService::create_user(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user(state.db(), id).await?;
    Ok(Json(user))
}

/// Update user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_user(state.db(), id, payload).await?;
    Ok(Json(user))
}

/// Delete user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    UserService::delete_user(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Upload a profile photo (multipart field `photo`)
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<UserResponse>> {
    let mut form = MultipartForm::collect(multipart).await?;
    let photo = form.take_required_file("photo")?;

    let user = UserService::update_photo(state.db(), id, &photo).await?;
    Ok(Json(user))
}
