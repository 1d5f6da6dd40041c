//! Single-owner run state of the timer.
//!
//! `PomodoroState` holds the configuration, the optional session and the
//! running flag. Every mutation goes through one of its methods so the
//! gating rules (no duration changes while a session exists, no ticks while
//! paused) live in one place.

use tracing::debug;

use crate::clock::SessionClock;
use crate::types::{
    Command, Session, SessionConfig, SessionKind, BREAK_STEP_MINUTES, FOCUS_STEP_MINUTES,
};

/// Result of a play/pause command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseOutcome {
    /// No session existed; a focus session was created and is running
    Started(Session),
    /// The running session was paused
    Paused,
    /// The paused session was resumed
    Resumed,
}

/// Result of one tick delivered to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to count down (paused or no session)
    Idle,
    /// One second was counted off
    Ticked(Session),
    /// The countdown had reached zero and the session kind flipped
    Advanced {
        /// Kind of the session that just finished
        completed: SessionKind,
        /// The new session
        next: Session,
    },
}

/// Result of applying a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    PlayPause(PlayPauseOutcome),
    Stopped,
    ConfigChanged(SessionConfig),
    /// The command had no effect (gated or already at a boundary)
    Ignored,
}

/// Configuration, session and run flag owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroState {
    config: SessionConfig,
    session: Option<Session>,
    is_running: bool,
}

impl PomodoroState {
    /// Creates a state with no session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            session: None,
            is_running: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns true if the ticker should be delivering ticks.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Returns true while a session exists, running or paused.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a session if none exists, otherwise toggles pause.
    pub fn play_pause(&mut self) -> PlayPauseOutcome {
        match self.session {
            None => {
                let session = SessionClock::start(&self.config);
                self.session = Some(session);
                self.is_running = true;
                debug!(remaining = session.remaining_seconds, "Session started");
                PlayPauseOutcome::Started(session)
            }
            Some(_) if self.is_running => {
                self.is_running = false;
                debug!("Session paused");
                PlayPauseOutcome::Paused
            }
            Some(_) => {
                self.is_running = true;
                debug!("Session resumed");
                PlayPauseOutcome::Resumed
            }
        }
    }

    /// Ends the session and halts the ticker.
    ///
    /// Returns false if there was no session to stop.
    pub fn stop(&mut self) -> bool {
        let had_session = self.session.is_some();
        self.session = SessionClock::stop();
        self.is_running = false;
        if had_session {
            debug!("Session stopped");
        }
        had_session
    }

    /// Adjusts the focus duration while no session exists.
    ///
    /// Returns true if the configuration changed.
    pub fn adjust_focus(&mut self, delta: i32) -> bool {
        self.adjust_with(|config| SessionClock::adjust_focus(config, delta))
    }

    /// Adjusts the break duration while no session exists.
    ///
    /// Returns true if the configuration changed.
    pub fn adjust_break(&mut self, delta: i32) -> bool {
        self.adjust_with(|config| SessionClock::adjust_break(config, delta))
    }

    fn adjust_with(&mut self, adjust: impl FnOnce(SessionConfig) -> SessionConfig) -> bool {
        if self.has_session() {
            debug!("Duration adjustment ignored while a session is active");
            return false;
        }
        let adjusted = adjust(self.config);
        if adjusted == self.config {
            return false;
        }
        self.config = adjusted;
        true
    }

    /// Delivers one tick: counts down, or advances once the countdown is at zero.
    pub fn on_tick(&mut self) -> TickOutcome {
        let session = match self.session {
            Some(session) if self.is_running => session,
            _ => return TickOutcome::Idle,
        };

        if session.is_elapsed() {
            let next = SessionClock::advance(session, &self.config);
            self.session = Some(next);
            debug!(completed = session.kind.label(), next = next.kind.label(), "Session advanced");
            TickOutcome::Advanced {
                completed: session.kind,
                next,
            }
        } else {
            let next = SessionClock::tick(session);
            self.session = Some(next);
            TickOutcome::Ticked(next)
        }
    }

    /// Applies a user command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let focus_step = FOCUS_STEP_MINUTES as i32;
        let break_step = BREAK_STEP_MINUTES as i32;

        let changed = match command {
            Command::PlayPause => return CommandOutcome::PlayPause(self.play_pause()),
            Command::Stop => {
                return if self.stop() {
                    CommandOutcome::Stopped
                } else {
                    CommandOutcome::Ignored
                };
            }
            Command::IncreaseFocus => self.adjust_focus(focus_step),
            Command::DecreaseFocus => self.adjust_focus(-focus_step),
            Command::IncreaseBreak => self.adjust_break(break_step),
            Command::DecreaseBreak => self.adjust_break(-break_step),
        };

        if changed {
            CommandOutcome::ConfigChanged(self.config)
        } else {
            CommandOutcome::Ignored
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
