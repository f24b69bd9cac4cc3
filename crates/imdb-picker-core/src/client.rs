//! HTTP client for the IMDb chart page
//!
//! Issues a single GET request per fetch with a browser-like User-Agent.
//! There is no retry or rate limiting: one fetch, one request.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{ImdbError, Result};

/// Chart fetched when no URL is configured
pub const DEFAULT_CHART_URL: &str = "https://www.imdb.com/chart/top";

/// Browser identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Page to fetch (default: the IMDb Top 250 chart)
    pub url: String,
    /// User-Agent header value (default: desktop Chrome)
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CHART_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper bound to one chart URL
pub struct ImdbClient {
    client: reqwest::Client,
    url: Url,
}

impl ImdbClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` - the configured URL cannot be parsed
    /// - `InvalidConfig` - the timeout is zero
    /// - `HttpError` - the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| ImdbError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        if config.timeout_secs == 0 {
            return Err(ImdbError::InvalidConfig(
                "Timeout must be at least one second".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(ImdbError::HttpError)?;

        Ok(Self { client, url })
    }

    /// The URL this client fetches
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the chart page
    ///
    /// # Returns
    /// The HTML content as a string
    ///
    /// # Errors
    /// - `HttpError` - DNS, connection, timeout or body read failures
    /// - `NotFound` - server returned 404
    /// - `Status` - any other non-success status
    pub async fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "fetching chart page");

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ImdbError::NotFound(self.url.to_string()));
        }

        if !status.is_success() {
            return Err(ImdbError::Status {
                status,
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "chart page received");
        Ok(body)
    }
}
