use axum::{Router, routing::post};

use super::handlers::generate_games;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate_games))
}
