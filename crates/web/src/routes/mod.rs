use axum::Router;

use crate::features::{check, draws, games};
use crate::state::AppState;

/// Everything served under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::routes::routes())
        .nest("/draws", draws::routes::routes())
        .nest("/check", check::routes::routes())
}
