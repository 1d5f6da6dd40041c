//! Command definitions for the Pomodoro clock CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{ConfigError, SessionConfig};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro clock - a terminal focus/break timer
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-clock",
    version,
    about = "Terminal Pomodoro timer",
    long_about = "A terminal Pomodoro timer.\n\
                  Alternates focus and break sessions, shows the remaining time and \
                  progress, and plays a cue when each session ends.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Focus duration in minutes (5-60, steps of 5)
    #[arg(
        short,
        long,
        env = "POMODORO_FOCUS_MINUTES",
        default_value = "25",
        value_parser = parse_focus_minutes
    )]
    pub focus: u32,

    /// Break duration in minutes (1-15)
    #[arg(
        short,
        long = "break",
        env = "POMODORO_BREAK_MINUTES",
        default_value = "5",
        value_parser = parse_break_minutes
    )]
    pub break_minutes: u32,

    /// Audio file to play when a session ends (defaults to a built-in chime)
    #[arg(short, long, value_name = "PATH", conflicts_with = "no_sound")]
    pub sound: Option<PathBuf>,

    /// Disable the session-complete sound
    #[arg(long)]
    pub no_sound: bool,

    /// Print every update as a JSON line instead of text
    #[arg(long)]
    pub json: bool,

    /// Tick period in milliseconds
    #[arg(
        long,
        hide = true,
        default_value = "1000",
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_millis: u64,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            focus: 25,
            break_minutes: 5,
            sound: None,
            no_sound: false,
            json: false,
            tick_millis: 1000,
        }
    }
}

impl RunArgs {
    /// Builds the session configuration from the parsed durations.
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(self.focus, self.break_minutes)
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

fn parse_minutes(s: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| format!("'{}' is not a whole number of minutes", s))
}

/// Validates the focus duration.
fn parse_focus_minutes(s: &str) -> Result<u32, String> {
    let minutes = parse_minutes(s)?;
    SessionConfig::validate_focus(minutes).map_err(|e| e.to_string())?;
    Ok(minutes)
}

/// Validates the break duration.
fn parse_break_minutes(s: &str) -> Result<u32, String> {
    let minutes = parse_minutes(s)?;
    SessionConfig::validate_break(minutes).map_err(|e| e.to_string())?;
    Ok(minutes)
}

// ============================================================================
// Tests
// ============================================================================
