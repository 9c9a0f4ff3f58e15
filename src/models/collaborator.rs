//! Collaborator model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Collaborator role extension of a user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Collaborator {
    pub user_id: i32,
    pub role: CollaboratorRole,
    /// `None` while the collaborator is not assigned to any team
    pub team_id: Option<i32>,
    pub institution: Option<String>,
}

/// What a collaborator does for the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "collaborator_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorRole {
    Professor,
    Setter,
    Tester,
    Organizer,
}

impl CollaboratorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Setter => "setter",
            Self::Tester => "tester",
            Self::Organizer => "organizer",
        }
    }
}

impl std::fmt::Display for CollaboratorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
