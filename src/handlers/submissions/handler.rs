//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, UpdateSubmissionRequest},
    response::SubmissionResponse,
};

/// List submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SubmissionResponse>>> {
    let (offset, limit) = query.window();
    let submissions = SubmissionService::list_submissions(state.db(), offset, limit).await?;
    Ok(Json(submissions))
}

/// Record a submission
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    payload.validate()?;

    let submission = SubmissionService::create_submission(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Get submission by ID
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), id).await?;
    Ok(Json(submission))
}

/// Update submission
pub async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubmissionRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    payload.validate()?;

    let submission = SubmissionService::update_submission(state.db(), id, payload).await?;
    Ok(Json(submission))
}

/// Delete submission
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    SubmissionService::delete_submission(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
