//! Sponsor handler implementations

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::SponsorService,
    state::AppState, utils::MultipartForm,
};

use super::{request::CreateSponsorRequest, response::SponsorResponse};

pub async fn list_sponsors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SponsorResponse>>> {
    let (offset, limit) = query.window();
    let sponsors = SponsorService::list_sponsors(state.db(), offset, limit).await?;
    Ok(Json(sponsors))
}

pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(payload): Json<CreateSponsorRequest>,
) -> AppResult<(StatusCode, Json<SponsorResponse>)> {
    payload.validate()?;

    let sponsor = SponsorService::create_sponsor(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(sponsor)))
}

pub async fn get_sponsor(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<SponsorResponse>> {
    let sponsor = SponsorService::get_sponsor(state.db(), user_id).await?;
    Ok(Json(sponsor))
}

pub async fn delete_sponsor(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<StatusCode> {
    SponsorService::delete_sponsor(state.db(), user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Upload the sponsor logo (multipart field `logo`)
pub async fn upload_logo(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    multipart: Multipart,
) -> AppResult<Json<SponsorResponse>> {
    let mut form = MultipartForm::collect(multipart).await?;
    let logo = form.take_required_file("logo")?;

    let sponsor = SponsorService::update_logo(state.db(), user_id, &logo).await?;
    Ok(Json(sponsor))
}
