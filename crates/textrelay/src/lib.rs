//! TextRelay - web page text extraction and webhook delivery
//!
//! This crate fetches a configured list of web pages, reduces each page to
//! its visible text, and forwards that text to a remote ingestion endpoint
//! as an authenticated JSON payload.
//!
//! ## Pipeline
//!
//! Each target URL passes through three stages, strictly in order:
//!
//! 1. [`Fetcher`] - one HTTP GET with a browser User-Agent and hard timeout
//! 2. [`extract_visible_text`] - DOM parse, script/style removal, whitespace
//!    collapse
//! 3. [`WebhookClient`] - one HTTP POST of the [`IngestPayload`] envelope
//!    with bearer-token authentication
//!
//! [`run`] drives the stages over the full target list; a failure on one URL
//! is logged and never stops the remaining URLs.

pub mod config;
pub mod deliver;
mod error;
pub mod extract;
pub mod fetch;
mod pipeline;
mod types;

pub use config::Config;
pub use deliver::WebhookClient;
pub use error::{DeliveryError, FetchError, RelayError};
pub use extract::extract_visible_text;
pub use fetch::Fetcher;
pub use pipeline::{run, RunSummary};
pub use types::{FetchResult, IngestPayload};

/// Browser-identifying User-Agent sent with every page fetch.
///
/// Some targets reject requests that do not look like a browser, so the
/// fetcher identifies as a mainstream desktop Chrome.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Value of the `source` field on every payload.
///
/// The ingestion endpoint routes records on this tag; it is part of the wire
/// contract and must not change without coordinating with the receiver.
pub const SOURCE_TAG: &str = "python_scraper";
