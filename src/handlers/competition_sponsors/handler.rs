//! Competition-sponsor handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::CompetitionSponsorService,
    state::AppState,
};

use super::{
    request::{CreateCompetitionSponsorRequest, UpdateCompetitionSponsorRequest},
    response::CompetitionSponsorResponse,
};

pub async fn list_links(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<CompetitionSponsorResponse>>> {
    let (offset, limit) = query.window();
    let links = CompetitionSponsorService::list_links(state.db(), offset, limit).await?;
    Ok(Json(links))
}

/// Sponsorship links of one competition
pub async fn list_competition_links(
    State(state): State<AppState>,
    Path(competition_id): Path<i32>,
) -> AppResult<Json<Vec<CompetitionSponsorResponse>>> {
    let links =
        CompetitionSponsorService::list_competition_links(state.db(), competition_id).await?;
    Ok(Json(links))
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompetitionSponsorRequest>,
) -> AppResult<(StatusCode, Json<CompetitionSponsorResponse>)> {
    payload.validate()?;

    let link = CompetitionSponsorService::create_link(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CompetitionSponsorResponse>> {
    let link = CompetitionSponsorService::get_link(state.db(), id).await?;
    Ok(Json(link))
}

pub async fn update_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompetitionSponsorRequest>,
) -> AppResult<Json<CompetitionSponsorResponse>> {
    payload.validate()?;

    let link = CompetitionSponsorService::update_link(state.db(), id, payload).await?;
    Ok(Json(link))
}

pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    CompetitionSponsorService::delete_link(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
