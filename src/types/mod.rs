//! Core data types for the Pomodoro clock.
//!
//! This module defines the data structures used for:
//! - Session kind and the countdown session itself
//! - Duration configuration with domain validation
//! - Commands issued by the presentation layer

mod error;

pub use error::ConfigError;

use serde::Serialize;

/// Smallest configurable focus duration in minutes.
pub const FOCUS_MIN_MINUTES: u32 = 5;
/// Largest configurable focus duration in minutes.
pub const FOCUS_MAX_MINUTES: u32 = 60;
/// Focus durations move in steps of this many minutes.
pub const FOCUS_STEP_MINUTES: u32 = 5;

/// Smallest configurable break duration in minutes.
pub const BREAK_MIN_MINUTES: u32 = 1;
/// Largest configurable break duration in minutes.
pub const BREAK_MAX_MINUTES: u32 = 15;
/// Break durations move in steps of this many minutes.
pub const BREAK_STEP_MINUTES: u32 = 1;

// ============================================================================
// SessionKind
// ============================================================================

/// Which half of the Pomodoro cycle a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// A focus interval
    Focusing,
    /// A break interval
    OnBreak,
}

impl SessionKind {
    /// Returns the human-readable label shown in the session title.
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Focusing => "Focusing",
            SessionKind::OnBreak => "On Break",
        }
    }

    /// Returns the other kind.
    pub fn flipped(&self) -> Self {
        match self {
            SessionKind::Focusing => SessionKind::OnBreak,
            SessionKind::OnBreak => SessionKind::Focusing,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// One active interval with its countdown.
///
/// A `Session` is a value: every transition produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Focusing or on break
    pub kind: SessionKind,
    /// Seconds left in this interval
    pub remaining_seconds: u32,
}

impl Session {
    pub fn new(kind: SessionKind, remaining_seconds: u32) -> Self {
        Self {
            kind,
            remaining_seconds,
        }
    }

    /// Returns true once the countdown has reached zero.
    pub fn is_elapsed(&self) -> bool {
        self.remaining_seconds == 0
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Focus and break durations.
///
/// Fields are private so that every value in circulation stays inside
/// [5,60] for focus and [1,15] for break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration from user-supplied durations.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if either duration is outside its domain or,
    /// for focus, not a multiple of the step.
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Result<Self, ConfigError> {
        Self::validate_focus(focus_minutes)?;
        Self::validate_break(break_minutes)?;
        Ok(Self {
            focus_minutes,
            break_minutes,
        })
    }

    /// Checks a focus duration against the domain and step.
    pub fn validate_focus(minutes: u32) -> Result<(), ConfigError> {
        let in_range = (FOCUS_MIN_MINUTES..=FOCUS_MAX_MINUTES).contains(&minutes);
        if !in_range || minutes % FOCUS_STEP_MINUTES != 0 {
            return Err(ConfigError::InvalidFocusMinutes(minutes));
        }
        Ok(())
    }

    /// Checks a break duration against the domain.
    pub fn validate_break(minutes: u32) -> Result<(), ConfigError> {
        if !(BREAK_MIN_MINUTES..=BREAK_MAX_MINUTES).contains(&minutes) {
            return Err(ConfigError::InvalidBreakMinutes(minutes));
        }
        Ok(())
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Returns the configured minutes for the given session kind.
    pub fn minutes_for(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Focusing => self.focus_minutes,
            SessionKind::OnBreak => self.break_minutes,
        }
    }

    /// Returns a copy with focus set to `minutes` clamped into its domain.
    pub(crate) fn with_focus_clamped(self, minutes: i64) -> Self {
        Self {
            focus_minutes: clamp_minutes(minutes, FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES),
            ..self
        }
    }

    /// Returns a copy with break set to `minutes` clamped into its domain.
    pub(crate) fn with_break_clamped(self, minutes: i64) -> Self {
        Self {
            break_minutes: clamp_minutes(minutes, BREAK_MIN_MINUTES, BREAK_MAX_MINUTES),
            ..self
        }
    }
}

fn clamp_minutes(minutes: i64, min: u32, max: u32) -> u32 {
    // Clamped into [min, max], so the narrowing cast cannot truncate.
    minutes.clamp(i64::from(min), i64::from(max)) as u32
}

// ============================================================================
// Command
// ============================================================================

/// A discrete user intent forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Start a session, or toggle pause on the current one
    PlayPause,
    /// Terminate the current session
    Stop,
    /// Focus duration +5 minutes
    IncreaseFocus,
    /// Focus duration -5 minutes
    DecreaseFocus,
    /// Break duration +1 minute
    IncreaseBreak,
    /// Break duration -1 minute
    DecreaseBreak,
}

impl Command {
    /// Returns the string representation of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::PlayPause => "play_pause",
            Command::Stop => "stop",
            Command::IncreaseFocus => "increase_focus",
            Command::DecreaseFocus => "decrease_focus",
            Command::IncreaseBreak => "increase_break",
            Command::DecreaseBreak => "decrease_break",
        }
    }

    /// Returns true for the four duration-adjustment commands.
    pub fn is_adjustment(&self) -> bool {
        !matches!(self, Command::PlayPause | Command::Stop)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // SessionKind Tests
    // ------------------------------------------------------------------------

    mod session_kind_tests {
        use super::*;

        #[test]
        fn test_labels() {
            assert_eq!(SessionKind::Focusing.label(), "Focusing");
            assert_eq!(SessionKind::OnBreak.label(), "On Break");
        }

        #[test]
        fn test_flipped() {
            assert_eq!(SessionKind::Focusing.flipped(), SessionKind::OnBreak);
            assert_eq!(SessionKind::OnBreak.flipped(), SessionKind::Focusing);
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&SessionKind::OnBreak).unwrap();
            assert_eq!(json, "\"on_break\"");
        }
    }

    // ------------------------------------------------------------------------
    // Session Tests
    // ------------------------------------------------------------------------

    mod session_tests {
        use super::*;

        #[test]
        fn test_is_elapsed() {
            assert!(Session::new(SessionKind::Focusing, 0).is_elapsed());
            assert!(!Session::new(SessionKind::Focusing, 1).is_elapsed());
        }

        #[test]
        fn test_serialize() {
            let session = Session::new(SessionKind::Focusing, 1500);
            let json = serde_json::to_value(session).unwrap();
            assert_eq!(json["kind"], "focusing");
            assert_eq!(json["remaining_seconds"], 1500);
        }
    }

    // ------------------------------------------------------------------------
    // SessionConfig Tests
    // ------------------------------------------------------------------------

    mod session_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = SessionConfig::default();
            assert_eq!(config.focus_minutes(), 25);
            assert_eq!(config.break_minutes(), 5);
        }

        #[test]
        fn test_new_boundary_values() {
            assert!(SessionConfig::new(5, 1).is_ok());
            assert!(SessionConfig::new(60, 15).is_ok());
        }

        #[test]
        fn test_new_rejects_focus_out_of_range() {
            assert_eq!(
                SessionConfig::new(0, 5),
                Err(ConfigError::InvalidFocusMinutes(0))
            );
            assert_eq!(
                SessionConfig::new(65, 5),
                Err(ConfigError::InvalidFocusMinutes(65))
            );
        }

        #[test]
        fn test_new_rejects_focus_off_step() {
            assert_eq!(
                SessionConfig::new(27, 5),
                Err(ConfigError::InvalidFocusMinutes(27))
            );
        }

        #[test]
        fn test_new_rejects_break_out_of_range() {
            assert_eq!(
                SessionConfig::new(25, 0),
                Err(ConfigError::InvalidBreakMinutes(0))
            );
            assert_eq!(
                SessionConfig::new(25, 16),
                Err(ConfigError::InvalidBreakMinutes(16))
            );
        }

        #[test]
        fn test_minutes_for() {
            let config = SessionConfig::new(40, 10).unwrap();
            assert_eq!(config.minutes_for(SessionKind::Focusing), 40);
            assert_eq!(config.minutes_for(SessionKind::OnBreak), 10);
        }

        #[test]
        fn test_clamped_setters() {
            let config = SessionConfig::default();
            assert_eq!(config.with_focus_clamped(-100).focus_minutes(), 5);
            assert_eq!(config.with_focus_clamped(1_000).focus_minutes(), 60);
            assert_eq!(config.with_break_clamped(0).break_minutes(), 1);
            assert_eq!(config.with_break_clamped(99).break_minutes(), 15);
            // The other field is untouched.
            assert_eq!(config.with_focus_clamped(30).break_minutes(), 5);
        }
    }

    // ------------------------------------------------------------------------
    // Command Tests
    // ------------------------------------------------------------------------

    mod command_tests {
        use super::*;

        #[test]
        fn test_is_adjustment() {
            assert!(!Command::PlayPause.is_adjustment());
            assert!(!Command::Stop.is_adjustment());
            assert!(Command::IncreaseFocus.is_adjustment());
            assert!(Command::DecreaseFocus.is_adjustment());
            assert!(Command::IncreaseBreak.is_adjustment());
            assert!(Command::DecreaseBreak.is_adjustment());
        }

        #[test]
        fn test_serialize_matches_as_str() {
            for command in [
                Command::PlayPause,
                Command::Stop,
                Command::IncreaseFocus,
                Command::DecreaseFocus,
                Command::IncreaseBreak,
                Command::DecreaseBreak,
            ] {
                let json = serde_json::to_string(&command).unwrap();
                assert_eq!(json, format!("\"{}\"", command.as_str()));
            }
        }
    }
}
