//! Host display surface abstraction
//!
//! The pipeline only needs four primitives from its host: prompt for
//! (possibly masked) text, open-or-reuse a named panel of known
//! character width, clear the panel, and append a line to it. The
//! [`Display`] trait captures exactly those, so the same pipeline runs
//! against a real terminal ([`TerminalDisplay`]) or an in-memory fake
//! ([`MemoryDisplay`]) in tests.

use crate::error::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where the host should place the inbox panel.
///
/// Purely a preference; hosts without split windows may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPlacement {
    Horizontal,
    Vertical,
}

/// The four host primitives the pipeline depends on.
pub trait Display {
    /// Show a labeled prompt and return the entered text.
    ///
    /// When `secret` is true the input must be masked as typed. The
    /// returned string may be empty; no validation happens here.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input from the host fails.
    fn prompt(&mut self, label: &str, secret: bool) -> Result<String>;

    /// Open (or reuse) the named panel and return its character width.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot provide a panel.
    fn open_panel(&mut self, title: &str, placement: PanelPlacement) -> Result<usize>;

    /// Discard the panel's entire current content.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot clear the panel.
    fn clear_panel(&mut self) -> Result<()>;

    /// Append one line of text to the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot write to the panel.
    fn append_line(&mut self, line: &str) -> Result<()>;
}

/// Terminal-backed display: prompts on stdin (masked via `rpassword`),
/// and treats the whole terminal as the panel, clearing it with an
/// ANSI escape before redrawing.
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    width: usize,
}

impl TerminalDisplay {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Display for TerminalDisplay {
    fn prompt(&mut self, label: &str, secret: bool) -> Result<String> {
        if secret {
            return Ok(rpassword::prompt_password(format!("{label}: "))?);
        }

        print!("{label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn open_panel(&mut self, title: &str, placement: PanelPlacement) -> Result<usize> {
        tracing::debug!("Opening panel '{}' ({:?})", title, placement);
        Ok(self.width)
    }

    fn clear_panel(&mut self) -> Result<()> {
        print!("\x1b[2J\x1b[H");
        io::stdout().flush()?;
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// In-memory display for tests and embedding hosts.
///
/// Queued inputs are handed out by [`Display::prompt`] in order; every
/// interaction is recorded so tests can assert on what the pipeline
/// did (and did not) touch.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    width: usize,
    inputs: VecDeque<String>,
    prompts: Vec<(String, bool)>,
    panel: Option<(String, PanelPlacement)>,
    clears: usize,
    lines: Vec<String>,
}

impl MemoryDisplay {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Queue a response for the next unanswered prompt.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push_back(input.into());
        self
    }

    /// Every prompt shown so far, as `(label, secret)` pairs.
    #[must_use]
    pub fn prompts(&self) -> &[(String, bool)] {
        &self.prompts
    }

    /// The panel opened by the pipeline, if any.
    #[must_use]
    pub fn panel(&self) -> Option<&(String, PanelPlacement)> {
        self.panel.as_ref()
    }

    /// How many times the panel was cleared.
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// The panel's current content, one string per appended line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Display for MemoryDisplay {
    fn prompt(&mut self, label: &str, secret: bool) -> Result<String> {
        self.prompts.push((label.to_string(), secret));
        Ok(self.inputs.pop_front().unwrap_or_default())
    }

    fn open_panel(&mut self, title: &str, placement: PanelPlacement) -> Result<usize> {
        self.panel = Some((title.to_string(), placement));
        Ok(self.width)
    }

    fn clear_panel(&mut self) -> Result<()> {
        self.clears += 1;
        self.lines.clear();
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
