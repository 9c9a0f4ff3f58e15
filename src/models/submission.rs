//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: i32,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub problem_id: i32,
    pub participant_user_id: i32,
}

/// Judging outcome of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Accepted,
    Rejected,
    Pending,
}
