//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create team request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    /// Collaborators to move into the new team
    #[serde(default)]
    pub collaborator_ids: Vec<i32>,
}

/// Update team request.
///
/// When `collaborator_ids` is present it replaces the membership: listed
/// collaborators join, every other current member is unassigned.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    pub collaborator_ids: Option<Vec<i32>>,
}
