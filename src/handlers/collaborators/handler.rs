//! Collaborator handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::CollaboratorService,
    state::AppState,
};

use super::{
    request::{CreateCollaboratorRequest, UpdateCollaboratorRequest},
    response::CollaboratorResponse,
};

pub async fn list_collaborators(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<CollaboratorResponse>>> {
    let (offset, limit) = query.window();
    let collaborators = CollaboratorService::list_collaborators(state.db(), offset, limit).await?;
    Ok(Json(collaborators))
}

pub async fn create_collaborator(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollaboratorRequest>,
) -> AppResult<(StatusCode, Json<CollaboratorResponse>)> {
    payload.validate()?;

    let collaborator = CollaboratorService::create_collaborator(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(collaborator)))
}

pub async fn get_collaborator(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<CollaboratorResponse>> {
    let collaborator = CollaboratorService::get_collaborator(state.db(), user_id).await?;
    Ok(Json(collaborator))
}

pub async fn update_collaborator(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateCollaboratorRequest>,
) -> AppResult<Json<CollaboratorResponse>> {
    payload.validate()?;

    let collaborator =
        CollaboratorService::update_collaborator(state.db(), user_id, payload).await?;
    Ok(Json(collaborator))
}

pub async fn delete_collaborator(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<StatusCode> {
    CollaboratorService::delete_collaborator(state.db(), user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
