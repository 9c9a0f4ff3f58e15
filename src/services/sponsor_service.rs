//! Sponsor service

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::{
    db::repositories::{CompetitionSponsorRepository, SponsorRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::{
        sponsors::{request::CreateSponsorRequest, response::SponsorResponse},
        users::response::UserResponse,
    },
    models::Sponsor,
    utils::encode_blob,
};

/// Sponsor service for business logic
pub struct SponsorService;

impl SponsorService {
    pub async fn list_sponsors(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<SponsorResponse>> {
        let sponsors = SponsorRepository::list(pool, offset, limit).await?;
        try_join_all(sponsors.into_iter().map(|s| Self::to_sponsor_response(pool, s))).await
    }

    pub async fn create_sponsor(
        pool: &PgPool,
        payload: CreateSponsorRequest,
    ) -> AppResult<SponsorResponse> {
        let sponsor = SponsorRepository::create(pool, payload.user_id).await?;

        tracing::info!(user_id = sponsor.user_id, "Sponsor created");
        Self::to_sponsor_response(pool, sponsor).await
    }

    pub async fn get_sponsor(pool: &PgPool, user_id: i32) -> AppResult<SponsorResponse> {
        let sponsor = SponsorRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sponsor not found".to_string()))?;

        Self::to_sponsor_response(pool, sponsor).await
    }

    /// Replace the sponsor logo
    pub async fn update_logo(pool: &PgPool, user_id: i32, logo: &[u8]) -> AppResult<SponsorResponse> {
        let sponsor = SponsorRepository::update_logo(pool, user_id, logo)
            .await?
            .ok_or_else(|| AppError::NotFound("Sponsor not found".to_string()))?;

        tracing::info!(user_id, bytes = logo.len(), "Sponsor logo updated");
        Self::to_sponsor_response(pool, sponsor).await
    }

    /// Delete sponsor; refused while sponsorship links remain
    pub async fn delete_sponsor(pool: &PgPool, user_id: i32) -> AppResult<()> {
        let deleted = SponsorRepository::delete(pool, user_id)
            .await
            .map_err(|e| e.into_delete_conflict("Sponsor"))?;

        if !deleted {
            return Err(AppError::NotFound("Sponsor not found".to_string()));
        }

        Ok(())
    }

    async fn to_sponsor_response(pool: &PgPool, sponsor: Sponsor) -> AppResult<SponsorResponse> {
        let (competition_count, total_contribution) =
            CompetitionSponsorRepository::totals_for_sponsor(pool, sponsor.user_id).await?;
        let user = UserRepository::find_by_id(pool, sponsor.user_id).await?;

        Ok(SponsorResponse {
            user_id: sponsor.user_id,
            logo: encode_blob(sponsor.logo.as_deref()),
            competition_count,
            total_contribution,
            user: user.map(UserResponse::from),
        })
    }
}
