// src/fetch/mod.rs

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::FetchSettings;
use crate::error::{Result, ScrapeError};

pub mod robots;

pub use robots::RobotsPolicy;

/// Thin wrapper over a configured `reqwest::Client`. No retries: a failed
/// request is reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .gzip(true)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self {
            client,
            user_agent: settings.user_agent.clone(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        debug!(%url, "fetching page");
        let fail = |source| ScrapeError::Fetch {
            url: url.clone(),
            source,
        };
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?
            .text()
            .await
            .map_err(fail)
    }

    /// GET `url` and return the body bytes, or `None` for a non-2xx status.
    pub(crate) async fn get_bytes_if_ok(&self, url: &Url) -> Result<Option<Vec<u8>>> {
        let fail = |source| ScrapeError::Fetch {
            url: url.clone(),
            source,
        };
        let resp = self.client.get(url.clone()).send().await.map_err(fail)?;
        if !resp.status().is_success() {
            debug!(%url, status = %resp.status(), "non-success status");
            return Ok(None);
        }
        let bytes = resp.bytes().await.map_err(fail)?;
        Ok(Some(bytes.to_vec()))
    }
}
