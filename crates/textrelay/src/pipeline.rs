//! Pipeline orchestration
//!
//! Drives fetch -> extract -> deliver over the configured target list,
//! strictly one URL at a time. A failure on one URL is logged with its
//! detail and processing moves on to the next; nothing here aborts the run.

use tracing::{error, info, warn};

use crate::config::Config;
use crate::deliver::WebhookClient;
use crate::error::RelayError;
use crate::extract::extract_visible_text;
use crate::fetch::Fetcher;
use crate::types::IngestPayload;

/// Line emitted between per-URL reports
const SEPARATOR: &str = "----------------------------------------";

/// Outcome counts for one full pass over the target list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs taken from the target list
    pub attempted: usize,
    /// URLs whose text reached the webhook
    pub delivered: usize,
    /// URLs that failed at the fetch or delivery stage
    pub failed: usize,
}

/// Process every configured target URL in order.
///
/// Warns once before starting if no bearer-token secret is configured
/// (delivery may then be rejected by the webhook, but the run proceeds).
pub async fn run(config: &Config) -> Result<RunSummary, RelayError> {
    if !config.has_secret() {
        warn!("WEBHOOK_SECRET is not set; webhook requests may be rejected as unauthorized");
    }

    let fetcher = Fetcher::new(config)?;
    let webhook = WebhookClient::new(config)?;

    let mut summary = RunSummary::default();
    for url in &config.target_urls {
        summary.attempted += 1;
        match process_url(&fetcher, &webhook, url).await {
            Ok(()) => {
                summary.delivered += 1;
                info!(%url, "success, data sent");
            }
            Err(err) => {
                summary.failed += 1;
                error!(%url, error = %err, "failed to process");
            }
        }
        info!("{}", SEPARATOR);
    }

    Ok(summary)
}

/// Run one URL through the full pipeline.
///
/// Delivery only happens once extraction has completed; a failed fetch never
/// produces a partial payload.
async fn process_url(
    fetcher: &Fetcher,
    webhook: &WebhookClient,
    url: &str,
) -> Result<(), RelayError> {
    info!(%url, "starting to scrape");
    let page = fetcher.fetch(url).await?;

    let raw_text = extract_visible_text(&page.body);
    let payload = IngestPayload::new(&page.url, raw_text);

    info!(%url, "sending data to webhook");
    webhook.deliver(&payload).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_default_is_zeroed() {
        let summary = RunSummary::default();
        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.delivered, 0);
        assert_eq!(summary.failed, 0);
    }

    #[tokio::test]
    async fn test_empty_target_list() {
        let mut config = Config::default();
        config.target_urls.clear();

        let summary = run(&config).await.unwrap();
        assert_eq!(summary, RunSummary::default());
    }
}
