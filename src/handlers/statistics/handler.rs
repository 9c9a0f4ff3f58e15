//! Statistic handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult, handlers::pagination::ListQuery, services::StatisticService,
    state::AppState,
};

use super::{
    request::{CreateStatisticRequest, UpdateStatisticRequest},
    response::StatisticResponse,
};

pub async fn list_statistics(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<StatisticResponse>>> {
    let (offset, limit) = query.window();
    let statistics = StatisticService::list_statistics(state.db(), offset, limit).await?;
    Ok(Json(statistics))
}

pub async fn create_statistic(
    State(state): State<AppState>,
    Json(payload): Json<CreateStatisticRequest>,
) -> AppResult<(StatusCode, Json<StatisticResponse>)> {
    payload.validate()?;

    let statistic = StatisticService::create_statistic(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(statistic)))
}

pub async fn get_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatisticResponse>> {
    let statistic = StatisticService::get_statistic(state.db(), id).await?;
    Ok(Json(statistic))
}

pub async fn update_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatisticRequest>,
) -> AppResult<Json<StatisticResponse>> {
    payload.validate()?;

    let statistic = StatisticService::update_statistic(state.db(), id, payload).await?;
    Ok(Json(statistic))
}

pub async fn delete_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    StatisticService::delete_statistic(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
