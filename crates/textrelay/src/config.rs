//! Runtime configuration
//!
//! Configuration is resolved once at startup and passed by reference into
//! the fetch and delivery stages. Nothing reads the process environment
//! after [`Config::from_env`] returns.

use std::env;
use std::time::Duration;

use crate::DEFAULT_USER_AGENT;

/// Environment variable naming the ingestion endpoint.
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Environment variable holding the bearer-token secret.
pub const WEBHOOK_SECRET_VAR: &str = "WEBHOOK_SECRET";

/// Ingestion endpoint used when `WEBHOOK_URL` is unset.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://us-central1-imobiliaria-ai-joaopessoa.cloudfunctions.net/ingestPropertyData";

/// Pages scraped when no explicit target list is given.
pub const DEFAULT_TARGET_URLS: &[&str] = &[
    "https://portoinc.com.br/",
    "https://somosghc.com/imovel/artus-vivence/",
];

/// Hard timeout applied to every outbound HTTP call, GET and POST alike.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolved runtime configuration, read-only after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ingestion endpoint receiving the extracted text.
    pub webhook_url: String,
    /// Bearer token sent in the `Authorization` header. May be empty, in
    /// which case the pipeline warns once before processing.
    pub webhook_secret: String,
    /// Pages to scrape, processed in order.
    pub target_urls: Vec<String>,
    /// User-Agent header for page fetches.
    pub user_agent: String,
    /// Timeout for each outbound HTTP call.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            webhook_secret: String::new(),
            target_urls: DEFAULT_TARGET_URLS.iter().map(|s| s.to_string()).collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// `WEBHOOK_URL` and `WEBHOOK_SECRET` override their defaults; every
    /// other field keeps its built-in value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(WEBHOOK_URL_VAR) {
            config.webhook_url = url;
        }
        if let Ok(secret) = env::var(WEBHOOK_SECRET_VAR) {
            config.webhook_secret = secret;
        }
        config
    }

    /// Whether a non-empty bearer token is configured.
    pub fn has_secret(&self) -> bool {
        !self.webhook_secret.is_empty()
    }
}
