//! Registration response DTOs

use serde::Serialize;

use crate::{handlers::users::response::UserResponse, models::Registration};

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub registration_id: i32,
    pub category: Option<String>,
    pub participant_user_id: i32,
    pub competition_id: i32,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            category: registration.category,
            participant_user_id: registration.participant_user_id,
            competition_id: registration.competition_id,
        }
    }
}

/// Result of a public sign-up: the new account and its registration
#[derive(Debug, Serialize)]
pub struct SelfRegistrationResponse {
    pub user: UserResponse,
    pub registration: RegistrationResponse,
}
