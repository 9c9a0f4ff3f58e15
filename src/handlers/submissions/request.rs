//! Submission request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::SubmissionStatus;

/// Record a submission
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Defaults to the time the request is handled
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default = "pending")]
    pub status: SubmissionStatus,

    pub problem_id: i32,

    pub participant_user_id: i32,
}

/// Update submission request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSubmissionRequest {
    pub submitted_at: Option<DateTime<Utc>>,
    pub status: Option<SubmissionStatus>,
    pub problem_id: Option<i32>,
    pub participant_user_id: Option<i32>,
}

fn pending() -> SubmissionStatus {
    SubmissionStatus::Pending
}
