//! Credential acquisition and the Basic auth header
//!
//! Credentials are collected once per invocation, used to build the
//! `Authorization` header, and dropped with the request. The password
//! is never echoed, logged, or exposed through `Debug`.

use crate::display::Display;
use crate::error::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::env;
use std::fmt;

/// A username/password pair for HTTP Basic authentication.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `GMAILBOX_USERNAME` / `GMAILBOX_PASSWORD`.
    ///
    /// Returns `None` unless both variables are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let username = env::var("GMAILBOX_USERNAME").ok()?;
        let password = env::var("GMAILBOX_PASSWORD").ok()?;
        Some(Self::new(username, password))
    }

    /// Obtain credentials from the environment, falling back to
    /// prompting on the given display.
    ///
    /// The password prompt is masked. No validation is performed here;
    /// bad or empty credentials surface later as an authentication
    /// failure from the fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the display fails to read input.
    pub fn obtain(display: &mut dyn Display) -> Result<Self> {
        if let Some(credentials) = Self::from_env() {
            return Ok(credentials);
        }

        let username = display.prompt("Gmail username", false)?;
        let password = display.prompt("Gmail password", true)?;
        Ok(Self::new(username, password))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The full `Authorization` header value:
    /// `Basic base64(username:password)`.
    ///
    /// Sent on the first request so no unauthenticated 401 round trip
    /// is needed.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
