//! Upstream liveness probe.
//!
//! One authenticated GET against the inference provider's identity endpoint.
//! Every failure mode collapses to "not available"; nothing is raised to callers.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

pub const WHOAMI_URL: &str = "https://huggingface.co/api/whoami-v2";

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no API key configured")]
    MissingKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

#[derive(Clone)]
pub struct UpstreamProbe {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl UpstreamProbe {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, ProbeError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: WHOAMI_URL.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    async fn try_check(&self) -> Result<(), ProbeError> {
        let api_key = self.api_key.as_deref().ok_or(ProbeError::MissingKey)?;

        let response = self.client.get(&self.url).bearer_auth(api_key).send().await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ProbeError::Status(status)),
        }
    }

    /// True only when the endpoint answered 200 within the timeout.
    pub async fn check(&self) -> bool {
        match self.try_check().await {
            Ok(()) => {
                info!("Upstream inference API reachable");
                true
            }
            Err(ProbeError::MissingKey) => {
                info!("No upstream API key configured, running in offline mode");
                false
            }
            Err(e) => {
                warn!("Upstream inference API unavailable: {e}");
                false
            }
        }
    }
}

/// Builds a probe for `url` and runs it once. A client that cannot be built
/// counts as unavailable.
pub async fn probe_upstream(api_key: Option<String>, timeout: Duration, url: &str) -> bool {
    match UpstreamProbe::new(api_key, timeout) {
        Ok(probe) => probe.with_url(url).check().await,
        Err(e) => {
            warn!("Upstream probe client could not be built: {e}");
            false
        }
    }
}
