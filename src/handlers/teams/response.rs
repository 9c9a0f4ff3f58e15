//! Team response DTOs

use serde::Serialize;

/// Team with its member count
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team_id: i32,
    pub name: String,
    pub member_count: i64,
}
