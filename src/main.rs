mod agent;
mod config;
mod errors;
mod fallback;
mod models;
mod routes;
mod service;

use std::sync::Arc;

use tracing::info;

use crate::agent::availability::{select_backend, BackendChoice, EnvCredential};
use crate::agent::OpenAiAgentService;
use crate::config::AppConfig;
use crate::service::chat_service::ChatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_relay=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let availability = Arc::new(EnvCredential::default());
    match select_backend(availability.as_ref()) {
        BackendChoice::Live { .. } => info!("Live backend credential found"),
        BackendChoice::Fallback => info!(
            "No live backend credential; answering from the offline fallback until one is set"
        ),
    }

    let live = Arc::new(OpenAiAgentService::new(config.openai_base_url.clone()));
    let chat_service = ChatService::new(availability, live, config.fallback_delay);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = routes::router(chat_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
