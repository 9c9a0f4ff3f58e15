//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Submission, SubmissionStatus};

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub submission_id: i32,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub problem_id: i32,
    pub participant_user_id: i32,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            submission_id: submission.submission_id,
            submitted_at: submission.submitted_at,
            status: submission.status,
            problem_id: submission.problem_id,
            participant_user_id: submission.participant_user_id,
        }
    }
}
