//! Collaborator service

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::{
    db::repositories::{
        CollaboratorRepository, CompetitionRepository, TeamRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        collaborators::{
            request::{CreateCollaboratorRequest, UpdateCollaboratorRequest},
            response::CollaboratorResponse,
        },
        users::response::UserResponse,
    },
    models::Collaborator,
};

/// Collaborator service for business logic
pub struct CollaboratorService;

impl CollaboratorService {
    pub async fn list_collaborators(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<CollaboratorResponse>> {
        let collaborators = CollaboratorRepository::list(pool, offset, limit).await?;
        try_join_all(
            collaborators
                .into_iter()
                .map(|c| Self::to_collaborator_response(pool, c)),
        )
        .await
    }

    pub async fn create_collaborator(
        pool: &PgPool,
        payload: CreateCollaboratorRequest,
    ) -> AppResult<CollaboratorResponse> {
        let collaborator = CollaboratorRepository::create(
            pool,
            payload.user_id,
            payload.role,
            payload.team_id,
            payload.institution.as_deref(),
        )
        .await?;

        tracing::info!(
            user_id = collaborator.user_id,
            role = %collaborator.role,
            "Collaborator created"
        );
        Self::to_collaborator_response(pool, collaborator).await
    }

    pub async fn get_collaborator(pool: &PgPool, user_id: i32) -> AppResult<CollaboratorResponse> {
        let collaborator = CollaboratorRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Collaborator not found".to_string()))?;

        Self::to_collaborator_response(pool, collaborator).await
    }

    pub async fn update_collaborator(
        pool: &PgPool,
        user_id: i32,
        payload: UpdateCollaboratorRequest,
    ) -> AppResult<CollaboratorResponse> {
        let collaborator = CollaboratorRepository::update(
            pool,
            user_id,
            payload.role,
            payload.team_id,
            payload.institution.as_ref().map(|i| i.as_deref()),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Collaborator not found".to_string()))?;

        Self::to_collaborator_response(pool, collaborator).await
    }

    pub async fn delete_collaborator(pool: &PgPool, user_id: i32) -> AppResult<()> {
        let deleted = CollaboratorRepository::delete(pool, user_id)
            .await
            .map_err(|e| e.into_delete_conflict("Collaborator"))?;

        if !deleted {
            return Err(AppError::NotFound("Collaborator not found".to_string()));
        }

        Ok(())
    }

    async fn to_collaborator_response(
        pool: &PgPool,
        collaborator: Collaborator,
    ) -> AppResult<CollaboratorResponse> {
        let (team_name, competition_count) = match collaborator.team_id {
            Some(team_id) => {
                let team = TeamRepository::find_by_id(pool, team_id).await?;
                let count = CompetitionRepository::count_by_team(pool, team_id).await?;
                (team.map(|t| t.name), count)
            }
            None => (None, 0),
        };

        let user = UserRepository::find_by_id(pool, collaborator.user_id).await?;

        Ok(CollaboratorResponse {
            user_id: collaborator.user_id,
            role: collaborator.role,
            team_id: collaborator.team_id,
            team_name,
            institution: collaborator.institution,
            competition_count,
            user: user.map(UserResponse::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CollaboratorRole, UserRole},
        test_utils::{fixtures, test_app::fresh_pool},
        utils::today,
    };

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_response_is_enriched_and_team_can_be_cleared() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        fixtures::competition(&pool, team.team_id, today(), None).await;
        let user = fixtures::user(&pool, "c@example.com", UserRole::Collaborator).await;

        let created = CollaboratorService::create_collaborator(
            &pool,
            CreateCollaboratorRequest {
                user_id: user.user_id,
                role: CollaboratorRole::Professor,
                team_id: Some(team.team_id),
                institution: Some("UnB".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(created.team_name.as_deref(), Some("Alpha"));
        assert_eq!(created.competition_count, 1);
        assert_eq!(created.user.unwrap().email, "c@example.com");

        // Absent team_id keeps the team
        let kept = CollaboratorService::update_collaborator(
            &pool,
            user.user_id,
            UpdateCollaboratorRequest {
                role: Some(CollaboratorRole::Tester),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(kept.team_id, Some(team.team_id));
        assert_eq!(kept.role, CollaboratorRole::Tester);

        let cleared = CollaboratorService::update_collaborator(
            &pool,
            user.user_id,
            UpdateCollaboratorRequest {
                team_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(cleared.team_id, None);
        assert_eq!(cleared.team_name, None);
        assert_eq!(cleared.competition_count, 0);
        assert_eq!(cleared.institution.as_deref(), Some("UnB"));

        let no_institution = CollaboratorService::update_collaborator(
            &pool,
            user.user_id,
            UpdateCollaboratorRequest {
                institution: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(no_institution.institution, None);
        assert_eq!(no_institution.role, CollaboratorRole::Tester);
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_unknown_user_is_invalid_reference() {
        let pool = fresh_pool().await;

        let err = CollaboratorService::create_collaborator(
            &pool,
            CreateCollaboratorRequest {
                user_id: 4242,
                role: CollaboratorRole::Setter,
                team_id: None,
                institution: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidReference(_)));
    }
}
