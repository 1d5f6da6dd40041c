//! Engine module for the Pomodoro clock.
//!
//! - `state`: single-owner run state and the tick-or-advance decision
//! - `timer`: tokio event loop that serializes ticks and commands

pub mod state;
pub mod timer;

pub use state::{CommandOutcome, PlayPauseOutcome, PomodoroState, TickOutcome};
pub use timer::{EngineUpdate, TimerEngine, TimerEvent, DEFAULT_TICK_PERIOD};
