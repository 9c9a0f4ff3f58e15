//! Team model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Team of collaborators organizing competitions
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i32,
    pub name: String,
}
