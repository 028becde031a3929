use axum::{Router, routing::get};

use super::handlers::{get_draw, get_latest_draw, list_draws, list_recent_draws};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_draws))
        .route("/latest", get(get_latest_draw))
        .route("/recent", get(list_recent_draws))
        .route("/:sequence", get(get_draw))
}
