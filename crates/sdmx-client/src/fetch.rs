//! HTTP fetch boundary.
//!
//! The parsers and exporters only ever see in-memory bytes; everything that
//! touches the network lives behind the [`Fetcher`] trait so tests (and
//! embedders with their own transport) can substitute a stub.

use std::time::Duration;

use thiserror::Error;

/// Registry endpoint of the Pacific Data Hub NSI instance.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://stats-nsi-stable.pacificdata.org/rest/codelist?detail=allstubs";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("sdmx-client/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport failure while dereferencing a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Retrieves raw bytes from a URL.
pub trait Fetcher {
    /// Fetch the document at `url`, failing without retrying.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Build a fetcher with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .timeout(timeout)
            .build()
            .map_err(|error| FetchError::Client(error.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "fetching document");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| FetchError::Network {
                url: url.to_string(),
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "fetch rejected");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|error| FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        })?;
        tracing::debug!(url, bytes = bytes.len(), "fetched document");
        Ok(bytes.to_vec())
    }
}
