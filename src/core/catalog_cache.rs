//! Cache-first movie catalog.
//!
//! A valid cache document is authoritative: there is no expiry and no
//! refresh. Only a missing (or unparsable) cache triggers a fetch, and a
//! successful fetch is written back verbatim.

use crate::core::store::{JsonStore, CATALOG_CACHE_SLOT};
use crate::models::movie::Movie;
use crate::services::catalog::CatalogSource;
use crate::{Error, Result};
use std::time::Duration;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a catalog load ended up.
#[derive(Debug)]
pub enum CatalogOutcome {
    /// Served from the cache document.
    Cached(Vec<Movie>),
    /// Fetched from the remote source and cached.
    Fetched(Vec<Movie>),
    /// Nothing usable; the error says why.
    Unavailable(Error),
}

impl CatalogOutcome {
    /// Collapse to a plain list. Failures become an empty list.
    pub fn into_movies(self) -> Vec<Movie> {
        match self {
            CatalogOutcome::Cached(movies) | CatalogOutcome::Fetched(movies) => movies,
            CatalogOutcome::Unavailable(_) => Vec::new(),
        }
    }

    /// Whether the load failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogOutcome::Unavailable(_))
    }
}

/// Catalog service: cache document first, remote source otherwise.
pub struct CatalogCache {
    store: JsonStore,
    source: Box<dyn CatalogSource>,
    timeout: Duration,
}

impl CatalogCache {
    /// Create a catalog service over `store` and `source`.
    pub fn new(store: JsonStore, source: Box<dyn CatalogSource>) -> Self {
        Self {
            store,
            source,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Bound every remote fetch by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current fetch deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load the catalog. Empty on any failure.
    pub async fn get_catalog(&self) -> Vec<Movie> {
        self.load_catalog().await.into_movies()
    }

    /// Load the catalog and report where it came from.
    pub async fn load_catalog(&self) -> CatalogOutcome {
        if let Some(movies) = self.read_cache() {
            tracing::info!("Loaded {} movies from cache", movies.len());
            return CatalogOutcome::Cached(movies);
        }

        tracing::info!("No usable cache, downloading from {}", self.source.describe());
        match self.fetch_and_cache().await {
            Ok(movies) => {
                tracing::info!("Fetched {} movies", movies.len());
                CatalogOutcome::Fetched(movies)
            }
            Err(e) => {
                tracing::warn!("Catalog unavailable: {}", e);
                CatalogOutcome::Unavailable(e)
            }
        }
    }

    /// Delete the cache document so the next load fetches again.
    pub fn clear_cache(&self) -> Result<()> {
        if self.store.remove(CATALOG_CACHE_SLOT)? {
            tracing::info!("Catalog cache cleared");
        } else {
            tracing::debug!("Catalog cache already empty");
        }
        Ok(())
    }

    /// Whether a cache document is present.
    pub fn has_cache(&self) -> bool {
        self.store.exists(CATALOG_CACHE_SLOT)
    }

    fn read_cache(&self) -> Option<Vec<Movie>> {
        let raw = match self.store.read_raw(CATALOG_CACHE_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read catalog cache: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(movies) => Some(movies),
            Err(e) => {
                tracing::warn!("Catalog cache is corrupt, ignoring it: {}", e);
                None
            }
        }
    }

    async fn fetch_and_cache(&self) -> Result<Vec<Movie>> {
        let raw = tokio::time::timeout(self.timeout, self.source.fetch_raw())
            .await
            .map_err(|_| Error::CatalogTimeout(self.timeout))??;

        let movies: Vec<Movie> = serde_json::from_str(&raw)?;

        if let Err(e) = self.store.write_raw(CATALOG_CACHE_SLOT, &raw) {
            tracing::warn!("Failed to write catalog cache: {}", e);
        }

        Ok(movies)
    }
}
