//! Fake feed server for integration testing
//!
//! This module provides an in-process HTTP server that serves a Gmail
//! inbox Atom feed to test the full pipeline end-to-end:
//!
//! GET with Basic auth -> check credentials -> 200 + XML body (or 401/500)
//!
//! ## Module layout
//!
//! - `server` -- TCP listener, request parsing, and response dispatch
//! - `feed` -- test data model (feed builder, served-feed config)

pub mod feed;
mod server;

pub use feed::{FeedBuilder, ServedFeed};
pub use server::FakeFeedServer;
