//! Read-only projection of the run state for rendering.
//!
//! Everything here is derived from `{config, session, is_running}` on every
//! call; no display flag is stored separately from the state it describes.

use serde::Serialize;

use crate::clock::{minutes_to_duration, seconds_to_duration, SessionClock};
use crate::engine::PomodoroState;

/// Which icon the play/pause control shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

/// Enabled state of each control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// Icon on the play/pause control
    pub play_pause: PlayPauseIcon,
    /// Stop is only meaningful while a session exists
    pub stop_enabled: bool,
    /// Duration +/- controls are locked while a session exists
    pub adjusters_enabled: bool,
}

/// Rendered description of the active session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// e.g. "Focusing for 25:00 minutes"
    pub title: String,
    /// e.g. "24:59 remaining"
    pub subtitle: String,
    /// 0 to 100
    pub percent_complete: u8,
}

/// Snapshot of everything the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    /// Configured focus duration as `MM:00`
    pub focus_duration: String,
    /// Configured break duration as `MM:00`
    pub break_duration: String,
    /// Present only while a session exists
    pub session: Option<SessionView>,
    pub is_running: bool,
    pub controls: Controls,
}

impl View {
    /// Builds the view for the given state.
    pub fn from_state(state: &PomodoroState) -> Self {
        let config = state.config();
        let has_session = state.has_session();

        let session = state.session().map(|session| SessionView {
            title: format!(
                "{} for {} minutes",
                session.kind.label(),
                minutes_to_duration(config.minutes_for(session.kind))
            ),
            subtitle: format!("{} remaining", seconds_to_duration(session.remaining_seconds)),
            percent_complete: SessionClock::percent_complete(session, config),
        });

        Self {
            focus_duration: minutes_to_duration(config.focus_minutes()),
            break_duration: minutes_to_duration(config.break_minutes()),
            session,
            is_running: state.is_running(),
            controls: Controls {
                play_pause: if state.is_running() {
                    PlayPauseIcon::Pause
                } else {
                    PlayPauseIcon::Play
                },
                stop_enabled: has_session,
                adjusters_enabled: !has_session,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Command, SessionConfig};

    fn state_with(config: SessionConfig) -> PomodoroState {
        PomodoroState::new(config)
    }

    #[test]
    fn test_idle_view() {
        let view = View::from_state(&state_with(SessionConfig::default()));

        assert_eq!(view.focus_duration, "25:00");
        assert_eq!(view.break_duration, "05:00");
        assert!(view.session.is_none());
        assert!(!view.is_running);
        assert_eq!(
            view.controls,
            Controls {
                play_pause: PlayPauseIcon::Play,
                stop_enabled: false,
                adjusters_enabled: true,
            }
        );
    }

    #[test]
    fn test_running_focus_view() {
        let mut state = state_with(SessionConfig::default());
        state.apply(Command::PlayPause);
        state.on_tick();

        let view = View::from_state(&state);

        let session = view.session.expect("session view");
        assert_eq!(session.title, "Focusing for 25:00 minutes");
        assert_eq!(session.subtitle, "24:59 remaining");
        assert_eq!(session.percent_complete, 1);
        assert_eq!(
            view.controls,
            Controls {
                play_pause: PlayPauseIcon::Pause,
                stop_enabled: true,
                adjusters_enabled: false,
            }
        );
    }

    #[test]
    fn test_paused_view_keeps_stop_enabled() {
        let mut state = state_with(SessionConfig::default());
        state.apply(Command::PlayPause);
        state.apply(Command::PlayPause);

        let view = View::from_state(&state);

        assert!(view.session.is_some());
        assert_eq!(view.controls.play_pause, PlayPauseIcon::Play);
        assert!(view.controls.stop_enabled);
        assert!(!view.controls.adjusters_enabled);
    }

    #[test]
    fn test_break_title_uses_break_duration() {
        let mut state = state_with(SessionConfig::new(5, 3).unwrap());
        state.apply(Command::PlayPause);
        for _ in 0..=300 {
            state.on_tick();
        }

        let view = View::from_state(&state);

        let session = view.session.expect("session view");
        assert_eq!(session.title, "On Break for 03:00 minutes");
        assert_eq!(session.subtitle, "03:00 remaining");
        assert_eq!(session.percent_complete, 0);
    }

    #[test]
    fn test_serialize_shape() {
        let view = View::from_state(&state_with(SessionConfig::default()));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["focus_duration"], "25:00");
        assert!(json["session"].is_null());
        assert_eq!(json["controls"]["play_pause"], "play");
    }
}
