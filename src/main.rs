//! Launch Dash - Launch Records Dashboard
//!
//! Loads the launch record CSV once, then serves a page with a site selector,
//! a payload range selector and two charts that recompute on every change.

mod charts;
mod config;
mod data;
mod web;

use anyhow::Context;
use config::DashConfig;
use data::LaunchDataset;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DashConfig::default();

    // An unreadable dataset is a startup error; the server never comes up.
    let dataset = LaunchDataset::load(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;

    let state = Arc::new(AppState::new(dataset, &config.title));
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("dashboard running at http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("dashboard stopped");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy("");
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
