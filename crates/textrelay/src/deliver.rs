//! Webhook delivery
//!
//! One POST per payload: JSON body, bearer-token authentication, the same
//! hard timeout as the fetch side. The response body is ignored; only the
//! status matters.

use tracing::debug;

use crate::config::Config;
use crate::error::DeliveryError;
use crate::types::IngestPayload;

/// Forwards extracted text to the ingestion webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
    secret: String,
}

impl WebhookClient {
    /// Create a delivery client from the resolved configuration
    pub fn new(config: &Config) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DeliveryError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.webhook_url.clone(),
            secret: config.webhook_secret.clone(),
        })
    }

    /// The endpoint payloads are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Deliver one payload.
    ///
    /// Sends `Authorization: Bearer <secret>` and `Content-Type:
    /// application/json`; any non-2xx response fails with
    /// [`DeliveryError::Status`] carrying the target page URL.
    pub async fn deliver(&self, payload: &IngestPayload) -> Result<(), DeliveryError> {
        debug!(url = %payload.url, chars = payload.raw_text.len(), "posting payload");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.secret)
            .json(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::from_reqwest(&payload.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                url: payload.url.clone(),
                status,
            });
        }

        Ok(())
    }
}
