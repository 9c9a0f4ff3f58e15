//! Team handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::TeamService, state::AppState,
};

use super::{
    request::{CreateTeamRequest, UpdateTeamRequest},
    response::TeamResponse,
};

/// List teams
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<TeamResponse>>> {
    let (offset, limit) = query.window();
    let teams = TeamService::list_teams(state.db(), offset, limit).await?;
    Ok(Json(teams))
}

/// Create a new team, optionally assigning collaborators
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<TeamResponse>)> {
    payload.validate()?;

    let team = TeamService::create_team(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Get team by ID
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::get_team(state.db(), id).await?;
    Ok(Json(team))
}

/// Update team
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamRequest>,
) -> AppResult<Json<TeamResponse>> {
    payload.validate()?;

    let team = TeamService::update_team(state.db(), id, payload).await?;
    Ok(Json(team))
}

/// Delete team
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    TeamService::delete_team(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
