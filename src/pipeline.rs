//! The single-shot inbox refresh pipeline
//!
//! Credentials -> fetch -> parse -> render -> panel write, in that
//! order, with no state carried between invocations. The panel is
//! only opened and cleared after fetch and parse have succeeded, so a
//! failed run leaves any previously rendered content untouched.

use crate::client::FeedClient;
use crate::credentials::Credentials;
use crate::display::{Display, PanelPlacement};
use crate::error::Result;
use crate::mailbox::MailboxSummary;
use crate::render::render;
use tracing::info;

/// Name of the panel the inbox is rendered into.
pub const PANEL_TITLE: &str = "gmailbox";

/// Run one full refresh against the given display.
///
/// Replaces the panel's content wholesale: open-or-reuse, clear, then
/// append the rendered lines in order.
///
/// # Errors
///
/// Propagates credential, fetch, parse, and display errors. On any
/// error before the panel write, the display surface has not been
/// modified.
pub async fn refresh(
    client: &FeedClient,
    display: &mut dyn Display,
    placement: PanelPlacement,
) -> Result<MailboxSummary> {
    let credentials = Credentials::obtain(display)?;
    let summary = client.fetch_inbox(&credentials).await?;
    drop(credentials);

    let width = display.open_panel(PANEL_TITLE, placement)?;
    let lines = render(&summary, width);

    display.clear_panel()?;
    for line in &lines {
        display.append_line(line)?;
    }

    info!(
        "Rendered {} unread ({} entries) at width {}",
        summary.full_count,
        summary.entries.len(),
        width
    );
    Ok(summary)
}
