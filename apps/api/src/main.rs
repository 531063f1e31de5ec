mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod pipeline;
mod resume;
mod routes;
mod search;
mod session;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ApiKeySource, GeminiClient};
use crate::resume::GeminiResumeParser;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MockStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AIOJobs API v{}", env!("CARGO_PKG_VERSION"));

    let store = MockStore::seeded()?;

    // Key is read per call, so a missing key only fails resume parsing.
    let gemini = GeminiClient::new(&config, ApiKeySource::Environment)?;
    info!("LLM client initialized (model: {})", gemini.model());
    if ApiKeySource::Environment.resolve().is_none() {
        tracing::warn!("No Gemini API key set; resume parsing will fail until one is provided");
    }

    info!(
        "Transition policy: {}, search delay: {}ms, quick filter delay: {}ms",
        config.transition_policy,
        config.search_delay.as_millis(),
        config.quick_filter_delay.as_millis()
    );

    let state = AppState::new(
        config.clone(),
        store,
        Arc::new(GeminiResumeParser(gemini)),
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
