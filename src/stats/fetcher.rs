//! HTTP client for the queue statistics endpoint.

use reqwest::header::USER_AGENT;
use url::Url;

use crate::error::FetchError;
use crate::snapshot::Snapshot;

/// Path of the statistics endpoint, relative to the service origin.
pub const STATS_PATH: &str = "/queues/stats";

const AGENT: &str = concat!("check-fireworq/", env!("CARGO_PKG_VERSION"));

/// Fetches the current per-queue counters.
#[derive(Debug, Clone)]
pub struct StatsFetcher {
    client: reqwest::Client,
    url: Url,
}

impl StatsFetcher {
    /// Create a fetcher for the service at `origin` (scheme, host and port).
    pub fn for_origin(origin: &Url) -> Result<Self, url::ParseError> {
        Ok(Self::new(origin.join(STATS_PATH)?))
    }

    /// Create a fetcher for an explicit stats URL.
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch and decode the current snapshot.
    pub async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let url = self.url.as_str();
        tracing::debug!(url = %url, "Fetching queue stats");

        let response = self
            .client
            .get(self.url.clone())
            .header(USER_AGENT, AGENT)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Stats request failed: non-success status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        let snapshot: Snapshot =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!(url = %url, queues = snapshot.len(), "Fetched queue stats");
        Ok(snapshot)
    }
}
