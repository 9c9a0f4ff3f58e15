//! User service

use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::{
        request::{CreateUserRequest, UpdateUserRequest},
        response::UserResponse,
    },
    models::User,
    utils::hash_password,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List users
    pub async fn list_users(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<UserResponse>> {
        let users = UserRepository::list(pool, offset, limit).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Create a new user with a hashed password
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<UserResponse> {
        let password_hash = hash_password(&payload.password)?;

        let user = UserRepository::create(
            pool,
            &payload.name,
            &payload.email,
            &password_hash,
            payload.role,
            None,
        )
        .await?;

        tracing::info!(user_id = user.user_id, role = %user.role, "User created");
        Ok(user.into())
    }

    /// Get user by ID
    pub async fn get_user(pool: &PgPool, id: i32) -> AppResult<UserResponse> {
        Self::find_user(pool, id).await.map(UserResponse::from)
    }

    /// Fetch the raw row, mapping absence to not-found
    pub async fn find_user(pool: &PgPool, id: i32) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Update user; only supplied fields change
    pub async fn update_user(
        pool: &PgPool,
        id: i32,
        payload: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let password_hash = payload
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = UserRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            password_hash.as_deref(),
            payload.role,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Replace the profile photo
    pub async fn update_photo(pool: &PgPool, id: i32, photo: &[u8]) -> AppResult<UserResponse> {
        let user = UserRepository::update_photo(pool, id, photo)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(user_id = id, bytes = photo.len(), "User photo updated");
        Ok(user.into())
    }

    /// Delete user; refused while role records still point at it
    pub async fn delete_user(pool: &PgPool, id: i32) -> AppResult<()> {
        let deleted = UserRepository::delete(pool, id)
            .await
            .map_err(|e| e.into_delete_conflict("User"))?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
