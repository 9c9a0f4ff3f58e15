//! Registration handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::RegistrationService,
    state::AppState, utils::MultipartForm,
};

use super::{
    request::{CreateRegistrationRequest, SelfRegistrationForm, UpdateRegistrationRequest},
    response::{RegistrationResponse, SelfRegistrationResponse},
};

/// List registrations
pub async fn list_registrations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    let (offset, limit) = query.window();
    let registrations = RegistrationService::list_registrations(state.db(), offset, limit).await?;
    Ok(Json(registrations))
}

/// Registrations of one competition
pub async fn list_competition_registrations(
    State(state): State<AppState>,
    Path(competition_id): Path<i32>,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    let registrations =
        RegistrationService::list_competition_registrations(state.db(), competition_id).await?;
    Ok(Json(registrations))
}

/// Register an existing participant
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    payload.validate()?;

    let registration = RegistrationService::create_registration(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

/// Public sign-up for a competition (multipart form)
pub async fn self_register(
    State(state): State<AppState>,
    Path(competition_id): Path<i32>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<SelfRegistrationResponse>)> {
    let form = SelfRegistrationForm::from_multipart(MultipartForm::collect(multipart).await?)?;
    form.validate()?;

    let response = RegistrationService::self_register(state.db(), competition_id, form).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get registration by ID
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RegistrationResponse>> {
    let registration = RegistrationService::get_registration(state.db(), id).await?;
    Ok(Json(registration))
}

/// Update registration
pub async fn update_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> AppResult<Json<RegistrationResponse>> {
    payload.validate()?;

    let registration = RegistrationService::update_registration(state.db(), id, payload).await?;
    Ok(Json(registration))
}

/// Delete registration
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    RegistrationService::delete_registration(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
