//! Registration model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A participant's enrollment in one competition
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: i32,
    pub category: Option<String>,
    pub participant_user_id: i32,
    pub competition_id: i32,
}
