//! Participant service

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::{
    db::repositories::{
        ParticipantRepository, RegistrationRepository, SubmissionRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        participants::{
            request::{CreateParticipantRequest, UpdateParticipantRequest},
            response::ParticipantResponse,
        },
        users::response::UserResponse,
    },
    models::Participant,
};

/// Participant service for business logic
pub struct ParticipantService;

impl ParticipantService {
    pub async fn list_participants(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<ParticipantResponse>> {
        let participants = ParticipantRepository::list(pool, offset, limit).await?;
        try_join_all(
            participants
                .into_iter()
                .map(|p| Self::to_participant_response(pool, p)),
        )
        .await
    }

    pub async fn create_participant(
        pool: &PgPool,
        payload: CreateParticipantRequest,
    ) -> AppResult<ParticipantResponse> {
        let participant =
            ParticipantRepository::create(pool, payload.user_id, payload.institution.as_deref())
                .await?;

        tracing::info!(user_id = participant.user_id, "Participant created");
        Self::to_participant_response(pool, participant).await
    }

    pub async fn get_participant(pool: &PgPool, user_id: i32) -> AppResult<ParticipantResponse> {
        let participant = ParticipantRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

        Self::to_participant_response(pool, participant).await
    }

    pub async fn update_participant(
        pool: &PgPool,
        user_id: i32,
        payload: UpdateParticipantRequest,
    ) -> AppResult<ParticipantResponse> {
        let institution = payload.institution.as_ref().map(|i| i.as_deref());
        let participant = ParticipantRepository::update(pool, user_id, institution)
            .await?
            .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

        Self::to_participant_response(pool, participant).await
    }

    /// Delete participant; refused while registrations or submissions remain
    pub async fn delete_participant(pool: &PgPool, user_id: i32) -> AppResult<()> {
        let deleted = ParticipantRepository::delete(pool, user_id)
            .await
            .map_err(|e| e.into_delete_conflict("Participant"))?;

        if !deleted {
            return Err(AppError::NotFound("Participant not found".to_string()));
        }

        Ok(())
    }

    async fn to_participant_response(
        pool: &PgPool,
        participant: Participant,
    ) -> AppResult<ParticipantResponse> {
        let submission_count =
            SubmissionRepository::count_by_participant(pool, participant.user_id).await?;
        let competition_count =
            RegistrationRepository::count_by_participant(pool, participant.user_id).await?;
        let user = UserRepository::find_by_id(pool, participant.user_id).await?;

        Ok(ParticipantResponse {
            user_id: participant.user_id,
            institution: participant.institution,
            submission_count,
            competition_count,
            user: user.map(UserResponse::from),
        })
    }
}
