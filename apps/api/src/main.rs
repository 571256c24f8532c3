mod advisor;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::{GuildAdvisor, LlmAdvisor, TemplateAdvisor};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::GuildCatalog;
use crate::profile::ProfileDefaults;
use crate::routes::build_router;
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

    info!("Starting guildmatch v{}", env!("CARGO_PKG_VERSION"));

    // Guild catalog: read once, immutable afterwards
    let catalog = match &config.guild_catalog_path {
        Some(path) => GuildCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load guild catalog from '{path}'"))?,
        None => {
            let catalog = GuildCatalog::builtin();
            info!("Using built-in guild catalog ({} guilds)", catalog.len());
            catalog
        }
    };

    let defaults: Arc<dyn ProfileDefaults> = Arc::from(config.profile_fallback.provider());
    info!("Profile fallback: {}", config.profile_fallback.as_str());

    let advisor: Arc<dyn GuildAdvisor> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM advisor enabled (model: {})", llm_client::MODEL);
            Arc::new(LlmAdvisor(llm))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; using template advisor");
            Arc::new(TemplateAdvisor)
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        defaults,
        advisor,
        config: config.clone(),
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
