//! Pomodoro Clock Library
//!
//! This library provides the core functionality for the Pomodoro clock CLI.
//! It includes:
//! - Pure session clock (ticks, Focusing ⇄ On Break, percent complete)
//! - Timer engine serializing ticks and user commands
//! - View projection of the timer state for rendering
//! - Sound cue playback on session completion
//! - CLI command parsing, input handling and display utilities

pub mod cli;
pub mod clock;
pub mod engine;
pub mod sound;
pub mod types;
pub mod view;

// Re-export commonly used types for convenience
pub use clock::{minutes_to_duration, seconds_to_duration, SessionClock};
pub use engine::{EngineUpdate, PomodoroState, TimerEngine, TimerEvent};
pub use types::{Command, ConfigError, Session, SessionConfig, SessionKind};
pub use view::View;

// Re-export sound types
pub use sound::{create_player, MockSoundPlayer, SoundCue, SoundError, SoundPlayer};
