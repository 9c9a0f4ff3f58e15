//! Submission repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Submission, SubmissionStatus},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Record a new submission
    pub async fn create(
        pool: &PgPool,
        submitted_at: DateTime<Utc>,
        status: SubmissionStatus,
        problem_id: i32,
        participant_user_id: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (submitted_at, status, problem_id, participant_user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(submitted_at)
        .bind(status)
        .bind(problem_id)
        .bind(participant_user_id)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE submission_id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Update submission
    pub async fn update(
        pool: &PgPool,
        id: i32,
        submitted_at: Option<DateTime<Utc>>,
        status: Option<SubmissionStatus>,
        problem_id: Option<i32>,
        participant_user_id: Option<i32>,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                submitted_at = COALESCE($2, submitted_at),
                status = COALESCE($3, status),
                problem_id = COALESCE($4, problem_id),
                participant_user_id = COALESCE($5, participant_user_id)
            WHERE submission_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(submitted_at)
        .bind(status)
        .bind(problem_id)
        .bind(participant_user_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Delete submission
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM submissions WHERE submission_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List submissions with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions ORDER BY submission_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Count submissions made by a participant
    pub async fn count_by_participant(pool: &PgPool, participant_user_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM submissions WHERE participant_user_id = $1"#,
        )
        .bind(participant_user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
