//! Collaborator response DTOs

use serde::Serialize;

use crate::{handlers::users::response::UserResponse, models::CollaboratorRole};

/// Collaborator with team details and the backing user
#[derive(Debug, Serialize)]
pub struct CollaboratorResponse {
    pub user_id: i32,
    pub role: CollaboratorRole,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub institution: Option<String>,
    /// Competitions organized by the collaborator's team
    pub competition_count: i64,
    pub user: Option<UserResponse>,
}
