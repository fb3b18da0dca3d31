//! sitewright - AI-assisted site builder service
//!
//! Wires the project model, preview engine, generation client and zip
//! export behind an HTTP surface a browser frontend talks to. All state
//! is in memory; sessions die with the process.

mod config;
mod debounce;
mod error;
mod handlers;
mod state;
mod templates;

use std::sync::Arc;

use env_logger::Env;

use generation::{GenerationClient, OpenAiCompatBackend};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    let mut backend = OpenAiCompatBackend::new(&config.backend_url, &config.model);
    if let Some(key) = &config.api_key {
        backend = backend.with_api_key(key);
    }
    let client = GenerationClient::new(Box::new(backend));
    if !client.health_check().await {
        log::warn!(
            "generation backend at {} is not responding; prompts will fail until it is up",
            config.backend_url
        );
    }

    let state = Arc::new(AppState::new(client, config.clone()));
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("sitewright listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
