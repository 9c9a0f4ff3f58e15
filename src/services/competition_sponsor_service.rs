//! Competition-sponsor link service

use sqlx::PgPool;

use crate::{
    db::repositories::{CompetitionRepository, CompetitionSponsorRepository},
    error::{AppError, AppResult},
    handlers::competition_sponsors::{
        request::{CreateCompetitionSponsorRequest, UpdateCompetitionSponsorRequest},
        response::CompetitionSponsorResponse,
    },
};

pub struct CompetitionSponsorService;

impl CompetitionSponsorService {
    pub async fn list_links(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<CompetitionSponsorResponse>> {
        let links = CompetitionSponsorRepository::list(pool, offset, limit).await?;
        Ok(links.into_iter().map(Into::into).collect())
    }

    /// Links of one competition; an unknown competition is a 404, not an empty list
    pub async fn list_competition_links(
        pool: &PgPool,
        competition_id: i32,
    ) -> AppResult<Vec<CompetitionSponsorResponse>> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let links = CompetitionSponsorRepository::list_by_competition(pool, competition_id).await?;
        Ok(links.into_iter().map(Into::into).collect())
    }

    pub async fn create_link(
        pool: &PgPool,
        payload: CreateCompetitionSponsorRequest,
    ) -> AppResult<CompetitionSponsorResponse> {
        let link = CompetitionSponsorRepository::create(
            pool,
            payload.competition_id,
            payload.sponsor_user_id,
            payload.contribution,
        )
        .await?;

        tracing::info!(
            link_id = link.link_id,
            competition_id = link.competition_id,
            sponsor_user_id = link.sponsor_user_id,
            "Sponsor linked to competition"
        );
        Ok(link.into())
    }

    pub async fn get_link(pool: &PgPool, id: i32) -> AppResult<CompetitionSponsorResponse> {
        CompetitionSponsorRepository::find_by_id(pool, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Competition sponsor not found".to_string()))
    }

    pub async fn update_link(
        pool: &PgPool,
        id: i32,
        payload: UpdateCompetitionSponsorRequest,
    ) -> AppResult<CompetitionSponsorResponse> {
        CompetitionSponsorRepository::update(
            pool,
            id,
            payload.competition_id,
            payload.sponsor_user_id,
            payload.contribution,
        )
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("Competition sponsor not found".to_string()))
    }

    pub async fn delete_link(pool: &PgPool, id: i32) -> AppResult<()> {
        if !CompetitionSponsorRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Competition sponsor not found".to_string()));
        }

        Ok(())
    }
}
