//! Timer engine for the Pomodoro clock.
//!
//! This module provides the event loop around [`PomodoroState`]:
//! - Command handling with gating
//! - Countdown with tokio::time::interval
//! - Update publishing (event + rendered view) for the presentation layer

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::state::{CommandOutcome, PlayPauseOutcome, PomodoroState, TickOutcome};
use crate::types::{Command, Session, SessionConfig, SessionKind};
use crate::view::View;

/// Real-time cadence of the ticker.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// What just happened inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerEvent {
    /// A new focus session was created
    SessionStarted {
        /// The session as created
        session: Session,
    },
    /// Timer paused
    Paused,
    /// Timer resumed
    Resumed,
    /// Session terminated
    Stopped,
    /// One second elapsed
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// The countdown reached zero and the session kind flipped
    SessionCompleted {
        /// Kind of the session that finished
        completed: SessionKind,
        /// Session that replaced it
        next: Session,
    },
    /// Focus or break duration changed
    ConfigChanged {
        /// New configuration
        config: SessionConfig,
    },
    /// A command arrived that had no effect
    Ignored {
        /// The command that was dropped
        command: Command,
    },
}

/// One published update: the event plus the view right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineUpdate {
    pub event: TimerEvent,
    pub view: View,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the Pomodoro state and publishes updates.
pub struct TimerEngine {
    /// Current run state
    state: PomodoroState,
    /// Update sender channel
    update_tx: mpsc::UnboundedSender<EngineUpdate>,
}

impl TimerEngine {
    /// Creates a new TimerEngine with the given configuration and update channel.
    pub fn new(config: SessionConfig, update_tx: mpsc::UnboundedSender<EngineUpdate>) -> Self {
        Self {
            state: PomodoroState::new(config),
            update_tx,
        }
    }

    /// Runs the ticker loop until the command channel closes.
    ///
    /// Commands and ticks are handled one at a time. Pending commands are
    /// always taken before a due tick, so a pause or stop is in effect before
    /// the next tick is considered.
    pub async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        period: Duration,
    ) -> Result<()> {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed, timer loop exiting");
                        return Ok(());
                    };

                    let was_running = self.state.is_running();
                    self.handle_command(command)?;
                    if !was_running && self.state.is_running() {
                        // first tick one full period after start/resume
                        ticker.reset();
                    }
                }
                _ = ticker.tick(), if self.state.is_running() => {
                    self.handle_tick()?;
                }
            }
        }
    }

    /// Applies one command and publishes the resulting update.
    pub fn handle_command(&mut self, command: Command) -> Result<()> {
        let event = match self.state.apply(command) {
            CommandOutcome::PlayPause(PlayPauseOutcome::Started(session)) => {
                TimerEvent::SessionStarted { session }
            }
            CommandOutcome::PlayPause(PlayPauseOutcome::Paused) => TimerEvent::Paused,
            CommandOutcome::PlayPause(PlayPauseOutcome::Resumed) => TimerEvent::Resumed,
            CommandOutcome::Stopped => TimerEvent::Stopped,
            CommandOutcome::ConfigChanged(config) => TimerEvent::ConfigChanged { config },
            CommandOutcome::Ignored => {
                debug!(command = command.as_str(), "Command ignored");
                TimerEvent::Ignored { command }
            }
        };

        self.publish(event)
            .with_context(|| format!("Failed to send update for {}", command.as_str()))
    }

    /// Delivers one tick and publishes the resulting update, if any.
    pub fn handle_tick(&mut self) -> Result<()> {
        let event = match self.state.on_tick() {
            TickOutcome::Idle => return Ok(()),
            TickOutcome::Ticked(session) => TimerEvent::Tick {
                remaining_seconds: session.remaining_seconds,
            },
            TickOutcome::Advanced { completed, next } => {
                info!(
                    completed = completed.label(),
                    next = next.kind.label(),
                    "Session completed"
                );
                TimerEvent::SessionCompleted { completed, next }
            }
        };

        self.publish(event).context("Failed to send tick update")
    }

    /// Returns a reference to the current run state.
    pub fn state(&self) -> &PomodoroState {
        &self.state
    }

    /// Returns the view of the current state.
    pub fn view(&self) -> View {
        View::from_state(&self.state)
    }

    fn publish(&self, event: TimerEvent) -> Result<()> {
        let update = EngineUpdate {
            event,
            view: self.view(),
        };
        self.update_tx
            .send(update)
            .map_err(|_| anyhow::anyhow!("update receiver dropped"))
    }
}

// ============================================================================
// Tests
// ============================================================================
