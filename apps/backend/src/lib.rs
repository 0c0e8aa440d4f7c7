pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use notes_core::CueConfig;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::recognizer::{PlainTextRecognizer, TextRecognizer};

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cues: Arc<CueConfig>,
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl AppState {
    pub fn new(config: Config, cues: CueConfig, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            config: Arc::new(config),
            cues: Arc::new(cues),
            recognizer,
        }
    }
}

/// Build the router with all routes and layers.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Text routes
        .route("/api/extract", post(routes::extract::extract))
        .route("/api/extract/semantic", post(routes::extract::extract_semantic))
        .route("/api/generate-questions", post(routes::questions::generate))
        // Upload routes
        .route("/api/upload", post(routes::upload::upload))
        .route("/api/upload/semantic", post(routes::upload::upload_semantic))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading cue configuration...");
    let cues = config.load_cues()?;

    let recognizer: Arc<dyn TextRecognizer> = Arc::new(PlainTextRecognizer);
    tracing::info!("Using recognizer {}", recognizer.name());

    let addr = config.addr();
    let state = AppState::new(config, cues, recognizer);
    let app = app(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
