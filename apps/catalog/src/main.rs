mod catalog;
mod config;
mod errors;
mod llm_client;
mod render;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::extractor::{FilterExtractor, LlmFilterExtractor};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting catalog v{}", env!("CARGO_PKG_VERSION"));

    // The product file is loaded exactly once; failure here is fatal.
    let catalog = Catalog::load(&config.products_path)
        .with_context(|| format!("Unable to load catalog from {}", config.products_path))?;

    let extractor = build_extractor(&config)?;

    let state = AppState {
        catalog: Arc::new(catalog),
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the AI filter extractor, or `None` when no API key is configured.
fn build_extractor(config: &Config) -> Result<Option<Arc<dyn FilterExtractor>>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("⚠️ OPENAI_API_KEY not found; AI search disabled, falling back to text and manual filters");
        return Ok(None);
    };

    let llm = LlmClient::new(
        api_key,
        config.openai_base_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build HTTP client for the completion service")?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    Ok(Some(Arc::new(LlmFilterExtractor(llm))))
}
