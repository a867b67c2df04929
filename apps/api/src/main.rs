mod config;
mod connectors;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::connectors::claude::ClaudeConnector;
use crate::connectors::mock::MockConnector;
use crate::connectors::JobExtractor;
use crate::extraction::service::ExtractionService;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobpost-api v{}", env!("CARGO_PKG_VERSION"));

    // Select the connector once, at startup. The service never knows which
    // variant it got.
    let connector: Arc<dyn JobExtractor> = if config.mock_llm {
        info!("MOCK_LLM enabled — serving canned extraction responses");
        Arc::new(MockConnector::new())
    } else {
        info!(
            "LLM connector initialized (model: {}, timeout: {}s)",
            config.claude_model, config.api_timeout_secs
        );
        Arc::new(ClaudeConnector::new(&config)?)
    };

    let state = AppState {
        extraction: ExtractionService::new(connector),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
