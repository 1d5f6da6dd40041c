//! Display utilities for the Pomodoro clock CLI.
//!
//! This module provides formatted output for:
//! - Duration header and key help
//! - One line per engine update (text) or one JSON object per update
//! - Error messages

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};

use super::input::KEY_HELP;
use crate::engine::{EngineUpdate, TimerEvent};
use crate::view::View;

/// Width of the text progress bar in characters.
const PROGRESS_BAR_WIDTH: usize = 20;

/// How updates are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

// ============================================================================
// Display
// ============================================================================

/// Writes timer output to stdout.
///
/// Write failures (a closed pipe, for instance) are returned as errors.
pub struct Display {
    format: OutputFormat,
    /// Ticks redraw one line in place when stdout is a terminal
    live: bool,
    /// A redrawn line is on screen without its newline
    line_open: Cell<bool>,
    out: RefCell<Box<dyn Write>>,
}

impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("format", &self.format)
            .field("live", &self.live)
            .field("line_open", &self.line_open)
            .finish_non_exhaustive()
    }
}

impl Display {
    pub fn new(format: OutputFormat) -> Self {
        let live = format == OutputFormat::Text && io::stdout().is_terminal();
        Self {
            format,
            live,
            line_open: Cell::new(false),
            out: RefCell::new(Box::new(io::stdout())),
        }
    }

    /// Creates a display writing to `out` instead of stdout.
    pub fn with_writer(format: OutputFormat, out: impl Write + 'static) -> Self {
        Self {
            format,
            live: false,
            line_open: Cell::new(false),
            out: RefCell::new(Box::new(out)),
        }
    }

    /// Shows the configured durations before anything happens.
    pub fn show_header(&self, view: &View) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.write_line(&Self::render_durations(view))?;
                self.write_line(KEY_HELP)
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&serde_json::json!({ "view": view }))
                    .context("Failed to serialize initial view")?;
                self.write_line(&line)
            }
        }
    }

    /// Shows one engine update.
    pub fn show_update(&self, update: &EngineUpdate) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = Self::render_update(update);
                if self.live && matches!(update.event, TimerEvent::Tick { .. }) {
                    let mut out = self.out.borrow_mut();
                    write!(out, "\r\x1b[2K{}", text).context("Failed to write to stdout")?;
                    out.flush().context("Failed to flush stdout")?;
                    self.line_open.set(true);
                    Ok(())
                } else {
                    self.close_line()?;
                    self.write_line(&text)
                }
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(update).context("Failed to serialize update")?;
                self.write_line(&line)
            }
        }
    }

    /// Shows the key reference.
    pub fn show_help(&self) -> Result<()> {
        if self.format == OutputFormat::Text {
            self.close_line()?;
            self.write_line(KEY_HELP)?;
        }
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(&self, message: &str) -> Result<()> {
        self.close_line()?;
        Self::show_fatal(message);
        Ok(())
    }

    /// Shows an error message without a `Display` instance.
    pub fn show_fatal(message: &str) {
        eprintln!("error: {}", message);
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line).context("Failed to write to stdout")?;
        out.flush().context("Failed to flush stdout")
    }

    fn close_line(&self) -> Result<()> {
        if self.line_open.replace(false) {
            self.write_line("")?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Renders the text for one update.
    pub fn render_update(update: &EngineUpdate) -> String {
        let view = &update.view;
        match &update.event {
            TimerEvent::SessionStarted { .. }
            | TimerEvent::Resumed
            | TimerEvent::Tick { .. } => Self::render_session(view),
            TimerEvent::Paused => format!("{} (paused)", Self::render_session(view)),
            TimerEvent::SessionCompleted { completed, .. } => format!(
                "{} complete\n{}",
                completed.label(),
                Self::render_session(view)
            ),
            TimerEvent::Stopped => format!("Session stopped\n{}", Self::render_durations(view)),
            TimerEvent::ConfigChanged { .. } => Self::render_durations(view),
            TimerEvent::Ignored { command } => {
                if !command.is_adjustment() {
                    "No session to stop".to_string()
                } else if view.controls.adjusters_enabled {
                    "Duration already at its limit".to_string()
                } else {
                    "Durations are locked while a session is active".to_string()
                }
            }
        }
    }

    /// Renders `Focus Duration: MM:SS | Break Duration: MM:SS`.
    pub fn render_durations(view: &View) -> String {
        format!(
            "Focus Duration: {} | Break Duration: {}",
            view.focus_duration, view.break_duration
        )
    }

    /// Renders the title, subtitle and progress bar of the active session.
    pub fn render_session(view: &View) -> String {
        match &view.session {
            Some(session) => format!(
                "{} | {} | {} {:>3}%",
                session.title,
                session.subtitle,
                Self::progress_bar(session.percent_complete),
                session.percent_complete
            ),
            None => "No active session".to_string(),
        }
    }

    /// Renders a fixed-width bar like `[#####...............]`.
    pub fn progress_bar(percent: u8) -> String {
        let filled = usize::from(percent.min(100)) * PROGRESS_BAR_WIDTH / 100;
        format!(
            "[{}{}]",
            "#".repeat(filled),
            ".".repeat(PROGRESS_BAR_WIDTH - filled)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
