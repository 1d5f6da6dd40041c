//! Session clock for the Pomodoro timer.
//!
//! This module holds the pure arithmetic of the timer:
//! - Countdown ticks and the Focusing ⇄ On Break transition
//! - Percent-complete for the progress indicator
//! - Clamped duration adjustment
//! - `MM:SS` formatting (see [`duration`])
//!
//! Nothing here performs I/O or owns a timer. The engine decides when to call
//! [`SessionClock::tick`] and when to call [`SessionClock::advance`].
//!
//! ```text
//!  Absent ──start──▶ Focusing ──advance──▶ On Break
//!    ▲                  │  ▲                  │
//!    │                  │  └─────advance──────┤
//!    └──────stop────────┴──────────stop───────┘
//! ```

pub mod duration;

pub use duration::{minutes_to_duration, seconds_to_duration};

use crate::types::{Session, SessionConfig, SessionKind};

/// Pure transition functions over [`Session`] and [`SessionConfig`].
pub struct SessionClock;

impl SessionClock {
    /// Starts a new focus session at the configured focus duration.
    pub fn start(config: &SessionConfig) -> Session {
        Session::new(
            SessionKind::Focusing,
            Self::total_seconds(SessionKind::Focusing, config),
        )
    }

    /// Counts down one second, never going below zero.
    pub fn tick(session: Session) -> Session {
        Session::new(session.kind, session.remaining_seconds.saturating_sub(1))
    }

    /// Flips to the other session kind with a full countdown.
    pub fn advance(session: Session, config: &SessionConfig) -> Session {
        let next = session.kind.flipped();
        Session::new(next, Self::total_seconds(next, config))
    }

    /// Ends the session entirely.
    pub fn stop() -> Option<Session> {
        None
    }

    /// Returns the full length of a session of `kind` in seconds.
    pub fn total_seconds(kind: SessionKind, config: &SessionConfig) -> u32 {
        config.minutes_for(kind) * 60
    }

    /// Returns how far through the current session we are, 0 to 100.
    ///
    /// Computed as `100 - floor(remaining * 100 / total)`, so the value is 0
    /// on the first second and 100 only once the countdown reaches zero.
    pub fn percent_complete(session: &Session, config: &SessionConfig) -> u8 {
        let total = Self::total_seconds(session.kind, config);
        let remaining_percent = session.remaining_seconds.saturating_mul(100) / total;
        // remaining never exceeds total while durations are locked
        100u32.saturating_sub(remaining_percent) as u8
    }

    /// Shifts the focus duration by `delta` minutes, clamped to [5,60].
    pub fn adjust_focus(config: SessionConfig, delta: i32) -> SessionConfig {
        config.with_focus_clamped(i64::from(config.focus_minutes()) + i64::from(delta))
    }

    /// Shifts the break duration by `delta` minutes, clamped to [1,15].
    pub fn adjust_break(config: SessionConfig, delta: i32) -> SessionConfig {
        config.with_break_clamped(i64::from(config.break_minutes()) + i64::from(delta))
    }
}

// ============================================================================
// Tests
// ============================================================================
