//! Participant handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::ParticipantService,
    state::AppState,
};

use super::{
    request::{CreateParticipantRequest, UpdateParticipantRequest},
    response::ParticipantResponse,
};

pub async fn list_participants(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ParticipantResponse>>> {
    let (offset, limit) = query.window();
    let participants = ParticipantService::list_participants(state.db(), offset, limit).await?;
    Ok(Json(participants))
}

pub async fn create_participant(
    State(state): State<AppState>,
    Json(payload): Json<CreateParticipantRequest>,
) -> AppResult<(StatusCode, Json<ParticipantResponse>)> {
    payload.validate()?;

    let participant = ParticipantService::create_participant(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

pub async fn get_participant(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ParticipantResponse>> {
    let participant = ParticipantService::get_participant(state.db(), user_id).await?;
    Ok(Json(participant))
}

pub async fn update_participant(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateParticipantRequest>,
) -> AppResult<Json<ParticipantResponse>> {
    payload.validate()?;

    let participant = ParticipantService::update_participant(state.db(), user_id, payload).await?;
    Ok(Json(participant))
}

pub async fn delete_participant(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<StatusCode> {
    ParticipantService::delete_participant(state.db(), user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
