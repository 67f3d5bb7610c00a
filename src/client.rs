//! Authenticated feed fetching
//!
//! One GET per invocation: the Basic `Authorization` header goes out
//! on the first request, so there is no unauthenticated 401 challenge
//! round trip. No retries; the request is bounded by the configured
//! timeout.

use crate::config::FeedConfig;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::mailbox::MailboxSummary;
use crate::parser::parse_feed;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, info};

/// HTTP client for the inbox Atom feed.
pub struct FeedClient {
    config: FeedConfig,
    http: reqwest::Client,
}

impl FeedClient {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: FeedConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Fetch the raw feed body with one authenticated GET.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] on a 401 response and [`Error::Network`]
    /// on any other non-success status or transport failure. Errors
    /// always propagate; nothing is swallowed.
    pub async fn fetch_feed(&self, credentials: &Credentials) -> Result<Vec<u8>> {
        debug!("Fetching feed from {}", self.config.url);

        let response = self
            .http
            .get(&self.config.url)
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Auth(format!(
                "Feed rejected credentials for '{}'",
                credentials.username()
            )));
        }
        if !status.is_success() {
            return Err(Error::Network(format!("Unexpected status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read body: {e}")))?;

        info!("Fetched feed ({} bytes)", body.len());
        Ok(body.to_vec())
    }

    /// Fetch and parse the inbox summary.
    ///
    /// # Errors
    ///
    /// Returns any [`fetch_feed`](Self::fetch_feed) error, or
    /// [`Error::MalformedFeed`] if the body does not match the feed
    /// schema.
    pub async fn fetch_inbox(&self, credentials: &Credentials) -> Result<MailboxSummary> {
        let body = self.fetch_feed(credentials).await?;
        parse_feed(&body)
    }
}
