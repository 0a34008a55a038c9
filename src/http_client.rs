//! Google Docs API client
//!
//! Features:
//! - TLS 1.3 via rustls
//! - Brotli, Gzip compression (auto-negotiated)
//! - Bearer authentication from a [`TokenSource`]
//! - One request per call: no retries, no caching

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::auth::TokenSource;
use crate::document::Document;
use crate::error::DocsError;

/// Production Docs API endpoint.
pub const DEFAULT_API_BASE: &str = "https://docs.googleapis.com";

/// Client for `documents.get`.
pub struct DocsClient {
    client: Client,
    api_base: String,
    tokens: Box<dyn TokenSource>,
}

impl DocsClient {
    /// Create a client against the production API.
    pub fn new(tokens: Box<dyn TokenSource>) -> Result<Self> {
        Self::with_api_base(tokens, DEFAULT_API_BASE)
    }

    /// Create a client against another API base URL.
    pub fn with_api_base(tokens: Box<dyn TokenSource>, api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .connect_timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("doctab/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Fetch one document by id.
    #[instrument(skip(self), fields(api_base = %self.api_base))]
    pub async fn get_document(&self, document_id: &str) -> Result<Document> {
        let token = self
            .tokens
            .access_token(&self.client)
            .await
            .context("failed to obtain access token")?;

        let url = document_url(&self.api_base, document_id)?;
        debug!(%url, "Fetching document");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .context("failed to reach Docs API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocsError::Api { status, body }.into());
        }

        let document: Document = response
            .json()
            .await
            .context("failed to parse document response")?;

        info!(
            title = %document.title,
            elements = document.content().map_or(0, <[_]>::len),
            "Document received"
        );

        Ok(document)
    }
}

/// `{api_base}/v1/documents/{id}` with the id percent-encoded as one path segment.
fn document_url(api_base: &str, document_id: &str) -> Result<Url> {
    let mut url =
        Url::parse(api_base).with_context(|| format!("invalid API base URL: {api_base}"))?;
    url.path_segments_mut()
        .map_err(|()| anyhow!("API base URL cannot have a path: {api_base}"))?
        .pop_if_empty()
        .extend(["v1", "documents", document_id]);
    Ok(url)
}
