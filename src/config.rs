//! Feed endpoint configuration

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

/// Default Gmail inbox Atom feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://mail.google.com/mail/feed/atom";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Feed endpoint configuration
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub timeout: Duration,
}

impl FeedConfig {
    /// Load feed configuration from environment variables
    ///
    /// Reads from `.env` file if present. All variables are optional
    /// (with defaults):
    /// - `GMAILBOX_FEED_URL` (default: the Gmail inbox Atom endpoint)
    /// - `GMAILBOX_TIMEOUT_SECS` (default: `30`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `GMAILBOX_TIMEOUT_SECS` is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = env::var("GMAILBOX_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("Invalid GMAILBOX_TIMEOUT_SECS: {e}")))?;

        Ok(Self {
            url: env::var("GMAILBOX_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
