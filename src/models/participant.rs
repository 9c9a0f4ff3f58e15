//! Participant model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Participant role extension of a user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: i32,
    pub institution: Option<String>,
}
