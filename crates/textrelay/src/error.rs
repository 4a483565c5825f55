//! Error types for TextRelay

use thiserror::Error;

/// Errors that can occur while retrieving a target page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Target is not an http(s) URL or fails to parse
    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    /// Failed to build the HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Request did not complete within the configured timeout
    #[error("GET {url} timed out")]
    Timeout { url: String },

    /// Connection or protocol failure
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Classify a reqwest error for the given target URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Errors that can occur while forwarding extracted text to the webhook
///
/// `url` is always the target page being processed, not the webhook
/// endpoint: the endpoint is global configuration, while failures are
/// reported per page.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Failed to build the HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Webhook answered with a non-success status
    #[error("Webhook delivery for {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Delivery did not complete within the configured timeout
    #[error("Webhook delivery for {url} timed out")]
    Timeout { url: String },

    /// Connection or protocol failure
    #[error("Webhook delivery for {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl DeliveryError {
    /// Classify a reqwest error for the given target URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DeliveryError::Timeout {
                url: url.to_string(),
            }
        } else {
            DeliveryError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Any failure while processing a single target URL
///
/// Caught at the pipeline boundary; one URL failing never aborts the rest
/// of the list.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
