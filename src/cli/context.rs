//! Services shared by every command.
//!
//! Built once in `main` and passed by reference; nothing here is global.

use crate::core::catalog_cache::{CatalogCache, CatalogOutcome};
use crate::core::profile_store::ProfileStore;
use crate::core::store::JsonStore;
use crate::models::config::Config;
use crate::models::movie::Movie;
use crate::services::catalog::HttpCatalogSource;
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Application services.
pub struct AppContext {
    pub config: Config,
    pub catalog: CatalogCache,
    pub profiles: ProfileStore,
}

impl AppContext {
    /// Wire up the services for `config`.
    pub fn new(config: Config) -> Result<Self> {
        let store = JsonStore::new(&config.data_dir);
        tracing::debug!("Data directory: {}", store.root().display());

        let source = HttpCatalogSource::new(&config.catalog)?;
        let catalog = CatalogCache::new(store.clone(), Box::new(source))
            .with_timeout(Duration::from_secs(config.catalog.timeout_secs));
        let profiles = ProfileStore::new(store);

        Ok(Self {
            config,
            catalog,
            profiles,
        })
    }

    /// Load the catalog with a spinner. Warns when nothing could be loaded.
    pub async fn load_movies(&self) -> Vec<Movie> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading movies...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = self.catalog.load_catalog().await;
        spinner.finish_and_clear();

        if let CatalogOutcome::Unavailable(ref e) = outcome {
            eprintln!("{} {}", "Failed to load movies:".red(), e);
        }
        outcome.into_movies()
    }
}

/// Tell the user a change was not written to disk.
pub fn warn_not_saved(what: &str, err: &crate::Error) {
    eprintln!("{} {} not saved: {}", "Warning:".yellow().bold(), what, err);
}
