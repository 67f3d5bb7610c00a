//! Fixed-width text rendering
//!
//! [`render`] is a pure function from a parsed [`MailboxSummary`] and a
//! display width to the exact lines to show, so it can be tested
//! byte-for-byte without any host. Writing the lines to a panel is the
//! pipeline's job.
//!
//! Layout rules:
//! - every line is exactly `display_width` chars, bordered with `|`;
//! - horizontal rules are `-` across the interior (`display_width - 2`);
//! - centered text gets the extra space (odd leftover) on the right;
//! - entry rows split the interior into a sender column (first third,
//!   floor) and a title column (the rest), separated by one `|`;
//! - overlong column text is truncated so the column ends in `...`.

use crate::mailbox::MailboxSummary;

/// Header line shown when the feed reports zero unread messages.
pub const NO_NEW_MESSAGES: &str = "No new messages in your Gmail Inbox";

/// Narrowest supported surface; smaller requested widths are clamped.
const MIN_WIDTH: usize = 10;

/// Render the summary into bordered lines of exactly `display_width`
/// characters each.
///
/// Deterministic: identical inputs yield byte-identical output. The
/// unread count (`full_count`) and the listed entries are treated
/// independently throughout.
#[must_use]
pub fn render(summary: &MailboxSummary, display_width: usize) -> Vec<String> {
    let width = display_width.max(MIN_WIDTH);
    let interior = width - 2;

    let mut lines = Vec::with_capacity(4 + summary.entries.len() * 2);

    lines.push(rule(interior));
    lines.push(center(&summary.title, interior));
    if summary.full_count > 0 {
        let tagline = format!("{} ({})", summary.tagline, summary.full_count);
        lines.push(center(&tagline, interior));
    } else {
        lines.push(center(NO_NEW_MESSAGES, interior));
    }
    lines.push(rule(interior));

    let sender_width = interior / 3;
    let title_width = interior - sender_width - 1;
    for entry in &summary.entries {
        lines.push(format!(
            "|{}|{}|",
            fit(&entry.author_email, sender_width),
            fit(&entry.title, title_width),
        ));
        lines.push(rule(interior));
    }

    lines
}

/// A horizontal rule spanning the interior width.
fn rule(interior: usize) -> String {
    format!("|{}|", "-".repeat(interior))
}

/// Center `text` inside the interior, borders included. The leftover
/// space for odd differences goes on the right.
fn center(text: &str, interior: usize) -> String {
    let text = fit_plain(text, interior);
    let len = text.chars().count();
    let left = (interior - len) / 2;
    let right = interior - len - left;
    format!("|{}{text}{}|", " ".repeat(left), " ".repeat(right))
}

/// Fit `text` into exactly `width` chars: right-pad when short,
/// truncate with a trailing `...` when long. Columns too narrow for
/// the ellipsis degrade to all dots.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut fitted = text.to_string();
        fitted.extend(std::iter::repeat_n(' ', width - len));
        return fitted;
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let mut fitted: String = text.chars().take(width - 3).collect();
    fitted.push_str("...");
    fitted
}

/// Truncate without padding, for centered header text.
fn fit_plain(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        fit(text, width)
    }
}
