use archive::DateRangeQuery;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use engine::Draw;
use engine::dto::draws::{DrawListResponse, DrawRangeParams, RecentDrawsParams};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/draws/latest",
    responses(
        (status = 200, description = "Latest draw, synthetic when the archive is unreachable", body = Draw)
    ),
    tag = "draws"
)]
pub async fn get_latest_draw(State(state): State<AppState>) -> Result<Response, WebError> {
    let draw = services::latest_draw(&state.fetcher).await;

    Ok(Json(draw).into_response())
}

#[utoipa::path(
    get,
    path = "/api/draws/{sequence}",
    params(
        ("sequence" = u32, Path, description = "Contest number")
    ),
    responses(
        (status = 200, description = "Draw found, synthetic when the archive is unreachable", body = Draw)
    ),
    tag = "draws"
)]
pub async fn get_draw(
    State(state): State<AppState>,
    Path(sequence): Path<u32>,
) -> Result<Response, WebError> {
    let draw = services::draw_by_sequence(&state.fetcher, sequence).await;

    Ok(Json(draw).into_response())
}

#[utoipa::path(
    get,
    path = "/api/draws",
    params(DrawRangeParams),
    responses(
        (status = 200, description = "Draws dated within the range, newest first", body = DrawListResponse),
        (status = 400, description = "Invalid dates")
    ),
    tag = "draws"
)]
pub async fn list_draws(
    State(state): State<AppState>,
    Query(params): Query<DrawRangeParams>,
) -> Result<Response, WebError> {
    let query = DateRangeQuery::new(params.start, params.end);
    let response = services::draws_in_range(&state.fetcher, query).await;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/draws/recent",
    params(RecentDrawsParams),
    responses(
        (status = 200, description = "Latest draws, newest first", body = DrawListResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "draws"
)]
pub async fn list_recent_draws(
    State(state): State<AppState>,
    Query(params): Query<RecentDrawsParams>,
) -> Result<Response, WebError> {
    params.validate()?;

    let response = services::recent_draws(&state.fetcher, params.count).await;

    Ok(Json(response).into_response())
}
