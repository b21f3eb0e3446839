//! Remote movie catalog client.
//!
//! The catalog is a single public JSON document fetched with one
//! unauthenticated GET. No paging, no auth, no version header.

use crate::models::config::CatalogConfig;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can hand back the raw catalog document.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog body as text.
    async fn fetch_raw(&self) -> Result<String>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// Catalog source backed by an HTTP GET.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    /// Create a client for `config.url` with `config.timeout_secs` applied to
    /// every request.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("movie-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_raw(&self) -> Result<String> {
        tracing::debug!("GET {}", self.url);
        let resp = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = resp.text().await?;
        tracing::debug!("Downloaded {} bytes", body.len());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
