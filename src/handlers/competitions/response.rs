//! Competition response DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::models::CompetitionStatus;

/// Competition with its derived status and registration count
#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub competition_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub team_id: i32,
    pub start_time: Option<NaiveTime>,
    pub max_participants: Option<i32>,
    pub description: Option<String>,
    pub status: CompetitionStatus,
    pub registration_count: i64,
}
