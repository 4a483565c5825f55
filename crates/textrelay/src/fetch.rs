//! Page fetching
//!
//! One GET per target URL, browser User-Agent, hard timeout, no retries.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::FetchError;
use crate::types::FetchResult;

/// Fetches raw HTML for target pages
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    user_agent: String,
    timeout: Duration,
}

impl Fetcher {
    /// Create a fetcher from the resolved configuration
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(crate::DEFAULT_USER_AGENT)),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }

    /// The User-Agent sent with every fetch
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The hard timeout applied to each fetch
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one target URL and return its body as text.
    ///
    /// Fails with [`FetchError::InvalidUrl`] before any network call for
    /// non-http(s) targets, and with [`FetchError::Status`] on any non-2xx
    /// response.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }
        Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        debug!(%url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        debug!(%url, bytes = body.len(), "page fetched");

        Ok(FetchResult {
            url: url.to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let result = fetcher.fetch("ftp://example.com/file.txt").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_rejects_unparsable_url() {
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let result = fetcher.fetch("http://").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetcher_keeps_configured_values() {
        let mut config = Config::default();
        config.timeout = Duration::from_secs(3);
        config.user_agent = "TestAgent/1.0".to_string();

        let fetcher = Fetcher::new(&config).unwrap();
        assert_eq!(fetcher.user_agent(), "TestAgent/1.0");
        assert_eq!(fetcher.timeout(), Duration::from_secs(3));
    }
}
