//! Configuration model.
//!
//! Values come from `config.toml` in the user's config directory and can be
//! overridden through environment variables:
//! - `MOVIE_EXPLORER_DATA_DIR`: where the cache, profile and settings live
//! - `MOVIE_CATALOG_URL`: remote catalog document
//! - `MOVIE_CATALOG_TIMEOUT`: fetch timeout in seconds (default: 30)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/DonH-ITS/jsonfiles/refs/heads/main/moviesemoji.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Private data directory.
    pub data_dir: PathBuf,
    /// Remote catalog configuration.
    pub catalog: CatalogConfig,
}

/// Remote catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// URL of the catalog JSON document.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Apply environment variable overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("MOVIE_EXPLORER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var("MOVIE_CATALOG_URL") {
            self.catalog.url = url;
        }
        if let Some(secs) = std::env::var("MOVIE_CATALOG_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.catalog.timeout_secs = secs;
        }
        self
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_explorer")
}

/// Default private data directory.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_explorer")
}

/// Load configuration from file, then apply environment overrides.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    let config = std::fs::read_to_string(&config_path)
        .ok()
        .and_then(|content| match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", config_path.display(), e);
                None
            }
        })
        .unwrap_or_default();

    config.with_env_overrides()
}
