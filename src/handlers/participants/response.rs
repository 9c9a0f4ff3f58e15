//! Participant response DTOs

use serde::Serialize;

use crate::handlers::users::response::UserResponse;

/// Participant with activity counters
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub user_id: i32,
    pub institution: Option<String>,
    pub submission_count: i64,
    /// Competitions the participant is registered for
    pub competition_count: i64,
    pub user: Option<UserResponse>,
}
