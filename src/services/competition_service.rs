//! Competition service

use futures::future::try_join_all;
use sqlx::{PgConnection, PgPool};

use crate::{
    db::{
        in_transaction,
        repositories::{
            CompetitionChanges, CompetitionRepository, NewCompetition, RegistrationRepository,
        },
    },
    error::{AppError, AppResult},
    handlers::competitions::{
        request::{CreateCompetitionRequest, UpdateCompetitionRequest},
        response::CompetitionResponse,
    },
    models::Competition,
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// List competitions
    pub async fn list_competitions(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<CompetitionResponse>> {
        let competitions = CompetitionRepository::list(pool, offset, limit).await?;
        try_join_all(
            competitions
                .into_iter()
                .map(|c| Self::to_competition_response(pool, c)),
        )
        .await
    }

    /// Create a new competition
    pub async fn create_competition(
        pool: &PgPool,
        payload: CreateCompetitionRequest,
    ) -> AppResult<CompetitionResponse> {
        let competition = CompetitionRepository::create(
            pool,
            &NewCompetition {
                name: &payload.name,
                location: payload.location.as_deref(),
                date: payload.date,
                team_id: payload.team_id,
                start_time: payload.start_time,
                max_participants: payload.max_participants,
                description: payload.description.as_deref(),
            },
        )
        .await?;

        tracing::info!(
            competition_id = competition.competition_id,
            team_id = competition.team_id,
            date = %competition.date,
            "Competition created"
        );
        Self::to_competition_response(pool, competition).await
    }

    /// Get competition by ID
    pub async fn get_competition(pool: &PgPool, id: i32) -> AppResult<CompetitionResponse> {
        let competition = CompetitionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        Self::to_competition_response(pool, competition).await
    }

    /// Update competition; a new capacity may not drop below current registrations
    pub async fn update_competition(
        pool: &PgPool,
        id: i32,
        payload: UpdateCompetitionRequest,
    ) -> AppResult<CompetitionResponse> {
        let competition = in_transaction(pool, move |conn| {
            Box::pin(async move {
                if let Some(Some(max)) = payload.max_participants {
                    Self::ensure_capacity_fits(conn, id, max).await?;
                }

                let changes = CompetitionChanges {
                    name: payload.name.as_deref(),
                    location: payload.location.as_ref().map(|v| v.as_deref()),
                    date: payload.date,
                    team_id: payload.team_id,
                    start_time: payload.start_time,
                    max_participants: payload.max_participants,
                    description: payload.description.as_ref().map(|v| v.as_deref()),
                };

                CompetitionRepository::update(&mut *conn, id, &changes)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))
            })
        })
        .await?;

        Self::to_competition_response(pool, competition).await
    }

    /// Delete competition; refused while problems, links or registrations remain
    pub async fn delete_competition(pool: &PgPool, id: i32) -> AppResult<()> {
        let deleted = CompetitionRepository::delete(pool, id)
            .await
            .map_err(|e| e.into_delete_conflict("Competition"))?;

        if !deleted {
            return Err(AppError::NotFound("Competition not found".to_string()));
        }

        Ok(())
    }

    /// Lock the competition row and check `max` still holds everyone registered
    async fn ensure_capacity_fits(conn: &mut PgConnection, id: i32, max: i32) -> AppResult<()> {
        CompetitionRepository::find_for_update(&mut *conn, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let registered = RegistrationRepository::count_by_competition(&mut *conn, id).await?;
        if registered > i64::from(max) {
            return Err(AppError::Conflict(format!(
                "Competition {} already has {} registrations",
                id, registered
            )));
        }

        Ok(())
    }

    async fn to_competition_response(
        pool: &PgPool,
        competition: Competition,
    ) -> AppResult<CompetitionResponse> {
        let registration_count =
            RegistrationRepository::count_by_competition(pool, competition.competition_id).await?;
        let status = competition.status();

        Ok(CompetitionResponse {
            competition_id: competition.competition_id,
            name: competition.name,
            location: competition.location,
            date: competition.date,
            team_id: competition.team_id,
            start_time: competition.start_time,
            max_participants: competition.max_participants,
            description: competition.description,
            status,
            registration_count,
        })
    }
}
