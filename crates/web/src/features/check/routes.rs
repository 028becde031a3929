use axum::{Router, routing::post};

use super::handlers::{check_manual, check_range};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(check_range))
        .route("/manual", post(check_manual))
}
