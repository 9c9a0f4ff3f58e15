//! Competition handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::CompetitionService,
    state::AppState,
};

use super::{
    request::{CreateCompetitionRequest, UpdateCompetitionRequest},
    response::CompetitionResponse,
};

/// List competitions
pub async fn list_competitions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<CompetitionResponse>>> {
    let (offset, limit) = query.window();
    let competitions = CompetitionService::list_competitions(state.db(), offset, limit).await?;
    Ok(Json(competitions))
}

/// Create a new competition
pub async fn create_competition(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    payload.validate()?;

    let competition = CompetitionService::create_competition(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(competition)))
}

/// Get competition by ID
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::get_competition(state.db(), id).await?;
    Ok(Json(competition))
}

/// Update competition
pub async fn update_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompetitionRequest>,
) -> AppResult<Json<CompetitionResponse>> {
    payload.validate()?;

    let competition = CompetitionService::update_competition(state.db(), id, payload).await?;
    Ok(Json(competition))
}

/// Delete competition
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    CompetitionService::delete_competition(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
