//! Fetching and parsing of the site's JSON data document.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// The data document consumed by templates.
///
/// Fields are untyped on purpose: the bootstrap copies them verbatim into
/// the data store without validation or transformation.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPayload {
    /// Destination entries rendered by the destinations pages.
    pub destinations: Value,
    /// Crew entries rendered by the crew pages.
    pub crew: Value,
    /// Technology entries rendered by the technology pages.
    pub technology: Value,
}

/// Source of the data document's raw text, abstracted so stores can be
/// exercised without a network.
pub trait DocumentSource {
    /// Retrieve the document at `url` as text.
    fn fetch_document(&self, url: &str) -> Result<String>;
}

/// HTTP-backed document source with an explicit request timeout.
pub struct HttpDocumentSource {
    client: reqwest::blocking::Client,
}

impl HttpDocumentSource {
    /// Build a source whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpDocumentSource {
    fn fetch_document(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {url} returned an error status"))?;
        response
            .text()
            .with_context(|| format!("failed to read response body from {url}"))
    }
}

/// Fetch and parse the data document. Transport and parse failures carry the
/// request URL in their context.
pub fn fetch_payload(source: &dyn DocumentSource, url: &str) -> Result<DataPayload> {
    let body = source.fetch_document(url)?;
    serde_json::from_str(&body).with_context(|| format!("failed to parse data document from {url}"))
}
