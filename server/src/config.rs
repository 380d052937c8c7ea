use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use common::{CustomBoard, Locale};
use serde::Deserialize;
use tracing::info;

/// Runtime settings, read from an optional TOML file and overridden by flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the jobs API
    pub server_url: String,
    pub listen_addr: SocketAddr,
    /// Jobs per listing page
    pub jobs_limit: u32,
    /// How long listing and filter responses stay fresh
    pub revalidate_secs: u64,
    pub default_locale: Locale,
    pub custom_board: CustomBoard,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            jobs_limit: 20,
            revalidate_secs: 60,
            default_locale: Locale::De,
            custom_board: CustomBoard::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }
}
