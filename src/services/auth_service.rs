//! Authentication service

use std::sync::LazyLock;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::JwtConfig,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::auth::response::{AuthResponse, CurrentUserResponse},
    models::{User, UserRole},
    utils::{generate_secure_token, hash_password, verify_password},
};

/// Hash checked when the email is unknown, so both failure paths run Argon2
static DECOY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password(&generate_secure_token(32)).ok());

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: UserRole,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Check credentials and issue an access token.
    ///
    /// Unknown email and wrong password fail with the same error.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<AuthResponse> {
        let Some(user) = UserRepository::find_by_email(pool, email).await? else {
            Self::verify_decoy(password)?;
            tracing::debug!("Login rejected: unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = user.user_id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, jwt)?;

        tracing::info!(user_id = user.user_id, role = %user.role, "User logged in");

        Ok(AuthResponse {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    fn verify_decoy(password: &str) -> AppResult<bool> {
        match DECOY_HASH.as_deref() {
            Some(hash) => verify_password(password, hash),
            None => Ok(false),
        }
    }

    /// Reduced projection of the user behind a verified token
    pub async fn current_user(pool: &PgPool, user_id: i32) -> AppResult<CurrentUserResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(CurrentUserResponse {
            user_id: user.user_id,
            email: user.email,
            role: user.role,
        })
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate access token, returning it with its lifetime in seconds
    pub fn generate_access_token(user: &User, jwt: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);
        let expires_in = jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.user_id.to_string(),
            email: user.email.clone(),
            role: user.role,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(expiry_hours: i64) -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours,
        }
    }

    fn user() -> User {
        User {
            user_id: 42,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Collaborator,
            photo: None,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = jwt_config(1);
        let (token, expires_in) = AuthService::generate_access_token(&user(), &config).unwrap();
        assert_eq!(expires_in, 3600);

        let claims = AuthService::verify_token(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, UserRole::Collaborator);
    }

    #[test]
    fn test_wrong_secret_is_invalid_token() {
        let (token, _) = AuthService::generate_access_token(&user(), &jwt_config(1)).unwrap();
        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token() {
        let (token, _) = AuthService::generate_access_token(&user(), &jwt_config(-2)).unwrap();
        let err = AuthService::verify_token(&token, "test-secret").unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_decoy_hash_never_matches() {
        assert!(DECOY_HASH.is_some());
        assert!(!AuthService::verify_decoy("").unwrap());
        assert!(!AuthService::verify_decoy("password123").unwrap());
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_login() {
        use crate::test_utils::{fixtures, test_app::fresh_pool};

        let pool = fresh_pool().await;
        let config = jwt_config(1);
        let user = fixtures::user(&pool, "ada@example.com", UserRole::Admin).await;

        let ok = AuthService::login(&pool, &config, "ada@example.com", fixtures::PASSWORD)
            .await
            .unwrap();
        assert_eq!(ok.user_id, user.user_id);
        assert_eq!(ok.role, UserRole::Admin);
        assert_eq!(ok.token_type, "Bearer");
        assert!(!serde_json::to_string(&ok).unwrap().contains("argon2"));

        let claims = AuthService::verify_token(&ok.access_token, &config.secret).unwrap();
        assert_eq!(claims.sub, user.user_id.to_string());

        let wrong_password = AuthService::login(&pool, &config, "ada@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = AuthService::login(&pool, &config, "ghost@example.com", "nope")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
