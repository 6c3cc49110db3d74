//! noughts - service entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppState, Config, GameStore, Notifier, router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => serve(host, port).await,
    }
}

/// Runs the HTTP game service.
async fn serve(host: String, port: u16) -> Result<()> {
    let config = Config::from_env();

    let store = Arc::new(GameStore::open(&config));
    let notifier = Notifier::new(config.telegram_bot_token().clone());
    let app = router(AppState { store, notifier }, &config);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!(%host, port, "noughts service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
