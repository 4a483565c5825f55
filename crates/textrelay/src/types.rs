//! Core types for TextRelay

use serde::{Deserialize, Serialize};

use crate::SOURCE_TAG;

/// Raw HTML retrieved for a single target URL
///
/// Produced by the fetcher, consumed by the text extractor, and discarded
/// once the URL's pipeline pass completes.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The URL the body was fetched from
    pub url: String,
    /// Response body as text
    pub body: String,
}

/// JSON envelope accepted by the ingestion webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestPayload {
    /// Fixed producer tag the endpoint routes on (see [`SOURCE_TAG`])
    pub source: String,
    /// The target page the text was extracted from
    pub url: String,
    /// Normalized visible text; possibly empty, never absent
    pub raw_text: String,
}

impl IngestPayload {
    /// Build a payload for the given page and extracted text
    pub fn new(url: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            source: SOURCE_TAG.to_string(),
            url: url.into(),
            raw_text: raw_text.into(),
        }
    }
}
