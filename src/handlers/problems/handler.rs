//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, services::ProblemService, state::AppState};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::ProblemResponse,
};

/// List problems, optionally for a single competition
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<Vec<ProblemResponse>>> {
    let (offset, limit) = query.window();
    let problems =
        ProblemService::list_problems(state.db(), offset, limit, query.competition_id).await?;
    Ok(Json(problems))
}

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;

    let problem = ProblemService::create_problem(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get problem by ID
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), id).await?;
    Ok(Json(problem))
}

/// Update problem
pub async fn update_problem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;

    let problem = ProblemService::update_problem(state.db(), id, payload).await?;
    Ok(Json(problem))
}

/// Delete problem
pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    ProblemService::delete_problem(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
