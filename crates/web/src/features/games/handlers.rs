use axum::{
    Json,
    response::{IntoResponse, Response},
};
use engine::dto::games::{GenerateGamesRequest, GenerateGamesResponse};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/games/generate",
    request_body = GenerateGamesRequest,
    responses(
        (status = 200, description = "Games generated", body = GenerateGamesResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "games"
)]
pub async fn generate_games(
    Json(req): Json<GenerateGamesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let games = services::generate_games(&req)?;
    tracing::info!("Generated {} game(s) with strategy '{}'", games.len(), req.strategy);

    Ok(Json(GenerateGamesResponse { games }).into_response())
}
