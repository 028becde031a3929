use archive::DateRangeQuery;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use engine::dto::check::{
    CheckRangeRequest, CheckRangeResponse, ManualCheckRequest, ManualCheckResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/check",
    request_body = CheckRangeRequest,
    responses(
        (status = 200, description = "Per-draw results and totals", body = CheckRangeResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "check"
)]
pub async fn check_range(
    State(state): State<AppState>,
    Json(req): Json<CheckRangeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    if req.start_date > req.end_date {
        return Err(WebError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let games = req.combinations()?;
    let query = DateRangeQuery::new(req.start_date, req.end_date);
    let response = services::check_range(&state.fetcher, &games, query).await;

    tracing::info!(
        "Checked {} game(s) against {} draw(s)",
        games.len(),
        response.summaries.len()
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/check/manual",
    request_body = ManualCheckRequest,
    responses(
        (status = 200, description = "Games scored against the given numbers", body = ManualCheckResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "check"
)]
pub async fn check_manual(Json(req): Json<ManualCheckRequest>) -> Result<Response, WebError> {
    req.validate()?;

    let games = req.combinations()?;

    Ok(Json(services::check_against(&games, &req.drawn)).into_response())
}
