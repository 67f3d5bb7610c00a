//! Gmail inbox Atom feed viewer
//!
//! Fetches the authenticated Gmail inbox Atom feed over HTTPS, parses
//! its fixed schema, and renders a fixed-width bordered summary onto a
//! host [`Display`] surface. The whole thing is a single-shot
//! pipeline — prompt, one GET, one parse, one render — with no state
//! across invocations.
//!
//! Hosts only need to provide the four [`Display`] primitives (prompt,
//! open panel, clear, append line); [`TerminalDisplay`] covers plain
//! terminals and [`MemoryDisplay`] is an in-memory fake for tests.

mod client;
mod config;
mod credentials;
mod display;
mod error;
mod mailbox;
mod parser;
mod pipeline;
mod render;

pub use client::FeedClient;
pub use config::{DEFAULT_FEED_URL, FeedConfig};
pub use credentials::Credentials;
pub use display::{Display, MemoryDisplay, PanelPlacement, TerminalDisplay};
pub use error::{Error, Result};
pub use mailbox::{EntryRecord, MailboxSummary};
pub use parser::{ATOM_NS, parse_feed};
pub use pipeline::{PANEL_TITLE, refresh};
pub use render::{NO_NEW_MESSAGES, render};
