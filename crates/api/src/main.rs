use anyhow::{Context, Result};
use api::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{store::InMemoryStore, utils::init_logger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("api", config.is_dev, config.enable_file_log)
        .context("Failed to initialize logging")?;

    let store = if config.seed_sample_data {
        InMemoryStore::with_sample_data().context("Failed to seed sample data")?
    } else {
        InMemoryStore::new()
    };

    let state = AppState::new(Arc::new(store));

    info!("🚀 Server starting on port {}", config.port);

    AppRouter::serve(config.port, state, &config.cors_allowed_origins)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
