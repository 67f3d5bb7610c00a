//! Parsed feed data model
//!
//! A [`MailboxSummary`] is built once per fetch by the parser and is
//! immutable afterwards. Entry order is the feed's document order and
//! is preserved through rendering.

use serde::Serialize;

/// Top-level summary of the inbox feed.
///
/// `full_count` is the unread-message count the feed reports; it is
/// independent of `entries.len()` (the feed may report more unread
/// messages than entries it lists). Consumers must treat the two
/// separately.
#[derive(Debug, Clone, Serialize)]
pub struct MailboxSummary {
    pub title: String,
    pub tagline: String,
    pub full_count: u32,
    /// Attributes of the feed's `link` element, in document order.
    pub link: Vec<(String, String)>,
    pub modified: String,
    pub entries: Vec<EntryRecord>,
}

/// A single feed entry (one unread message).
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    pub title: String,
    pub summary: String,
    pub issued: String,
    pub id: String,
    pub author_name: String,
    pub author_email: String,
}
