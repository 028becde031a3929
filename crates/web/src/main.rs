use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use features::{check, draws, games};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        games::handlers::generate_games,
        draws::handlers::get_latest_draw,
        draws::handlers::get_draw,
        draws::handlers::list_draws,
        draws::handlers::list_recent_draws,
        check::handlers::check_range,
        check::handlers::check_manual,
    ),
    components(
        schemas(
            engine::dto::games::GenerateGamesRequest,
            engine::dto::games::GenerateGamesResponse,
            engine::dto::games::GeneratedGame,
            engine::dto::draws::DrawListResponse,
            engine::dto::check::CheckRangeRequest,
            engine::dto::check::CheckRangeResponse,
            engine::dto::check::ManualCheckRequest,
            engine::dto::check::ManualCheckResponse,
            engine::services::check::DrawSummary,
            engine::services::check::CheckStatistics,
            engine::models::Combination,
            engine::models::Draw,
            engine::models::PrizeTier,
            engine::scoring::ScoredCombination,
        )
    ),
    tags(
        (name = "games", description = "Game generation"),
        (name = "draws", description = "Official draw history"),
        (name = "check", description = "Result checking"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,archive=info,engine=info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Lotofácil API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");
    tracing::info!("Draw archive at: {}", config.archive.base_url);

    let state = AppState::new(config.archive.clone()).context("Failed to build archive client")?;

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
