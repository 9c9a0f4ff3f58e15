//! User response DTOs

use serde::Serialize;

use crate::{
    models::{User, UserRole},
    utils::encode_blob,
};

/// Public user projection; the password hash never leaves the server
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Base64-encoded photo
    pub photo: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            photo: encode_blob(user.photo.as_deref()),
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_is_base64_and_hash_is_hidden() {
        let user = User {
            user_id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: UserRole::Sponsor,
            photo: Some(b"png".to_vec()),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["photo"], "cG5n");
        assert_eq!(json["role"], "sponsor");
        assert!(!json.to_string().contains("argon2"));
    }
}
