//! Static page parameters
//!
//! Counts the jobs each locale lists and writes one `{locale, pageIndex}`
//! entry per listing page to data/static_params.json, so every page can be
//! rendered ahead of time.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use common::{CustomBoard, Locale, SearchParams, static_params};
use fetcher::{ApiClient, CachePolicy};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prerender")]
#[command(version)]
#[command(about = "Generate listing page parameters for every locale")]
struct Args {
    /// Base URL of the jobs API
    #[arg(long, env = "JOB_BOARD_SERVER_URL", default_value = "http://localhost:8000")]
    server_url: String,

    /// Jobs per listing page
    #[arg(long, default_value = "20")]
    limit: u32,

    /// Board configuration; its `[custom_board]` table sets the employer filter
    #[arg(long, env = "JOB_BOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Only count jobs of this employer; overrides the configuration file
    #[arg(long, env = "JOB_BOARD_EMPLOYER_NAME")]
    employer_name: Option<String>,

    /// Where to write the parameters
    #[arg(long, default_value = "data/static_params.json")]
    output: PathBuf,
}

/// The part of the server configuration file prerendering needs.
#[derive(Deserialize, Default)]
struct BoardFile {
    #[serde(default)]
    custom_board: CustomBoard,
}

fn parse_board(content: &str) -> Result<CustomBoard> {
    let file: BoardFile = toml::from_str(content).context("Failed to parse configuration")?;
    Ok(file.custom_board)
}

fn load_board(path: &Path) -> Result<CustomBoard> {
    info!(path = %path.display(), "Loading board configuration");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_board(&content)
}

/// Employer filter from the flag, else from the board.
fn employer_filter(flag: Option<String>, board: &CustomBoard) -> Option<String> {
    flag.or_else(|| board.employer_name_filter.clone())
        .filter(|name| !name.is_empty())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let board = match &args.config {
        Some(path) => load_board(path)?,
        None => CustomBoard::default(),
    };
    let client = ApiClient::new(&args.server_url).context("Failed to create API client")?;
    let search = SearchParams {
        employer_name: employer_filter(args.employer_name.clone(), &board),
        ..Default::default()
    };

    let mut counts = Vec::new();
    for locale in Locale::ALL {
        let jobs = client
            .get_jobs(locale, &search, CachePolicy::NoStore)
            .await
            .with_context(|| format!("Failed to count jobs for locale {locale}"))?;
        info!(locale = %locale, jobs = jobs.len(), "Counted jobs");
        counts.push((locale, jobs.len()));
    }

    let params = static_params(counts, args.limit);
    info!(pages = params.len(), "Generated page parameters");

    if let Some(dir) = args.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(&params).context("Failed to serialize parameters")?;
    tokio::fs::write(&args.output, json)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(path = %args.output.display(), "Saved page parameters");
    Ok(())
}
