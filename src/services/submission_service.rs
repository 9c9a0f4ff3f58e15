//! Submission service

use sqlx::PgPool;

use crate::{
    db::repositories::SubmissionRepository,
    error::{AppError, AppResult},
    handlers::submissions::{
        request::{CreateSubmissionRequest, UpdateSubmissionRequest},
        response::SubmissionResponse,
    },
    utils::now_utc,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// List submissions
    pub async fn list_submissions(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<SubmissionResponse>> {
        let submissions = SubmissionRepository::list(pool, offset, limit).await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }

    /// Record a submission
    pub async fn create_submission(
        pool: &PgPool,
        payload: CreateSubmissionRequest,
    ) -> AppResult<SubmissionResponse> {
        let submission = SubmissionRepository::create(
            pool,
            payload.submitted_at.unwrap_or_else(now_utc),
            payload.status,
            payload.problem_id,
            payload.participant_user_id,
        )
        .await?;

        tracing::info!(
            submission_id = submission.submission_id,
            problem_id = submission.problem_id,
            participant_user_id = submission.participant_user_id,
            "Submission recorded"
        );
        Ok(submission.into())
    }

    /// Get submission by ID
    pub async fn get_submission(pool: &PgPool, id: i32) -> AppResult<SubmissionResponse> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Update submission
    pub async fn update_submission(
        pool: &PgPool,
        id: i32,
        payload: UpdateSubmissionRequest,
    ) -> AppResult<SubmissionResponse> {
        SubmissionRepository::update(
            pool,
            id,
            payload.submitted_at,
            payload.status,
            payload.problem_id,
            payload.participant_user_id,
        )
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Delete submission
    pub async fn delete_submission(pool: &PgPool, id: i32) -> AppResult<()> {
        if !SubmissionRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Submission not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::repositories::{ProblemRepository, RegistrationRepository},
        models::{Difficulty, SubmissionStatus},
        services::ParticipantService,
        test_utils::{fixtures, test_app::fresh_pool},
        utils::today,
    };

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_submission_defaults_and_participant_counts() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let cup = fixtures::competition(&pool, team.team_id, today(), None).await;
        let participant = fixtures::participant(&pool, "p@example.com").await;
        RegistrationRepository::create(&pool, participant.user_id, cup.competition_id, None)
            .await
            .unwrap();
        let problem = ProblemRepository::create(
            &pool,
            "Two Sum",
            Difficulty::Easy,
            "https://judge.example.com/p/1",
            cup.competition_id,
        )
        .await
        .unwrap();

        let before = chrono::Utc::now();
        let submission = SubmissionService::create_submission(
            &pool,
            CreateSubmissionRequest {
                submitted_at: None,
                status: SubmissionStatus::Pending,
                problem_id: problem.problem_id,
                participant_user_id: participant.user_id,
            },
        )
        .await
        .unwrap();
        assert!(submission.submitted_at >= before - chrono::Duration::seconds(1));

        let judged = SubmissionService::update_submission(
            &pool,
            submission.submission_id,
            UpdateSubmissionRequest {
                status: Some(SubmissionStatus::Accepted),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(judged.status, SubmissionStatus::Accepted);
        assert_eq!(judged.submitted_at, submission.submitted_at);

        let counts = ParticipantService::get_participant(&pool, participant.user_id)
            .await
            .unwrap();
        assert_eq!(counts.submission_count, 1);
        assert_eq!(counts.competition_count, 1);
        assert_eq!(counts.institution.as_deref(), Some("UnB"));

        assert!(matches!(
            ParticipantService::delete_participant(&pool, participant.user_id).await,
            Err(AppError::Conflict(_))
        ));

        SubmissionService::delete_submission(&pool, submission.submission_id)
            .await
            .unwrap();
        assert!(matches!(
            SubmissionService::get_submission(&pool, submission.submission_id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
