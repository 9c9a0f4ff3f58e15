//! Collaborator request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, handlers::nullable::present, models::CollaboratorRole};

/// Create collaborator request; `user_id` must name an existing user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollaboratorRequest {
    pub user_id: i32,

    pub role: CollaboratorRole,

    pub team_id: Option<i32>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub institution: Option<String>,
}

/// Update collaborator request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCollaboratorRequest {
    pub role: Option<CollaboratorRole>,

    /// Absent: keep the team. `null`: unassign. Number: move to that team.
    #[serde(default, deserialize_with = "present")]
    pub team_id: Option<Option<i32>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub institution: Option<Option<String>>,
}
