pub mod request_id;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::CacheRepository;

use request_id::request_id_middleware;

/// Build the application router with all routes and layers configured
pub fn build_router(
    config: &Config,
    cache_repo: Arc<dyn CacheRepository>,
    tts_controller: Arc<TtsController>,
) -> Router {
    // TTS route (public)
    let tts_routes = Router::new()
        .route("/tts", get(TtsController::synthesize))
        .with_state(tts_controller);

    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(cache_repo);

    let allowed_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET]);

    Router::new()
        .merge(health_routes)
        .merge(tts_routes)
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    cache_repo: Arc<dyn CacheRepository>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, cache_repo, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
