//! Team service

use futures::future::try_join_all;
use sqlx::{PgConnection, PgPool};

use crate::{
    db::{
        in_transaction,
        repositories::{CollaboratorRepository, TeamRepository},
    },
    error::{AppError, AppResult},
    handlers::teams::{
        request::{CreateTeamRequest, UpdateTeamRequest},
        response::TeamResponse,
    },
    models::Team,
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// List teams
    pub async fn list_teams(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<TeamResponse>> {
        let teams = TeamRepository::list(pool, offset, limit).await?;
        try_join_all(teams.into_iter().map(|t| Self::to_team_response(pool, t))).await
    }

    /// Create a team and move the listed collaborators into it, all or nothing
    pub async fn create_team(pool: &PgPool, payload: CreateTeamRequest) -> AppResult<TeamResponse> {
        let CreateTeamRequest {
            name,
            collaborator_ids,
        } = payload;

        let team = in_transaction(pool, move |conn| {
            Box::pin(async move {
                let team = TeamRepository::create(&mut *conn, &name).await?;
                Self::assign_members(conn, team.team_id, &collaborator_ids).await?;
                Ok(team)
            })
        })
        .await?;

        tracing::info!(team_id = team.team_id, "Team created");
        Self::to_team_response(pool, team).await
    }

    /// Get team by ID
    pub async fn get_team(pool: &PgPool, id: i32) -> AppResult<TeamResponse> {
        let team = TeamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Self::to_team_response(pool, team).await
    }

    /// Rename a team and, when ids are given, replace its membership
    pub async fn update_team(
        pool: &PgPool,
        id: i32,
        payload: UpdateTeamRequest,
    ) -> AppResult<TeamResponse> {
        let UpdateTeamRequest {
            name,
            collaborator_ids,
        } = payload;

        let team = in_transaction(pool, move |conn| {
            Box::pin(async move {
                let team = TeamRepository::update(&mut *conn, id, name.as_deref())
                    .await?
                    .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

                if let Some(ids) = collaborator_ids {
                    let released = CollaboratorRepository::release_team(&mut *conn, id, &ids).await?;
                    tracing::debug!(team_id = id, released, "Previous team members unassigned");
                    Self::assign_members(conn, id, &ids).await?;
                }

                Ok(team)
            })
        })
        .await?;

        Self::to_team_response(pool, team).await
    }

    /// Delete team; its collaborators become unassigned
    pub async fn delete_team(pool: &PgPool, id: i32) -> AppResult<()> {
        let deleted = TeamRepository::delete(pool, id)
            .await
            .map_err(|e| e.into_delete_conflict("Team"))?;

        if !deleted {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        Ok(())
    }

    /// Move `ids` into `team_id`; every id must name an existing collaborator
    async fn assign_members(conn: &mut PgConnection, team_id: i32, ids: &[i32]) -> AppResult<()> {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        if unique.is_empty() {
            return Ok(());
        }

        let assigned = CollaboratorRepository::assign_team(&mut *conn, team_id, &unique).await?;
        if assigned != unique.len() as u64 {
            return Err(AppError::InvalidReference(
                "One or more collaborators do not exist".to_string(),
            ));
        }

        Ok(())
    }

    async fn to_team_response(pool: &PgPool, team: Team) -> AppResult<TeamResponse> {
        let member_count = TeamRepository::get_member_count(pool, team.team_id).await?;

        Ok(TeamResponse {
            team_id: team.team_id,
            name: team.name,
            member_count,
        })
    }
}
