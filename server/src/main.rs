//! Job Board Server
//!
//! Serves localized job listings with a filter panel, rendered from the
//! jobs API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use job_board::{AppConfig, AppState, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "job-board")]
#[command(version)]
#[command(about = "Server-rendered job board")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, env = "JOB_BOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the jobs API (overrides the file)
    #[arg(long, env = "JOB_BOARD_SERVER_URL")]
    server_url: Option<String>,

    /// Address to listen on (overrides the file)
    #[arg(long, env = "JOB_BOARD_LISTEN")]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(server_url) = args.server_url {
        config = config.with_server_url(server_url);
    }
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    let addr = config.listen_addr;
    info!(api = %config.server_url, jobs_limit = config.jobs_limit, "Starting job board");

    let state = AppState::new(config).context("Failed to create API client")?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %addr, "Server running");

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
