//! Interactive timer session.
//!
//! Wires the pieces together: stdin lines become [`Command`]s for the
//! engine task, engine updates are rendered, and completed sessions ring the
//! sound cue.

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use super::commands::RunArgs;
use super::display::{Display, OutputFormat};
use super::input::{parse_input, spawn_stdin_reader, Input};
use crate::engine::{EngineUpdate, TimerEngine, TimerEvent};
use crate::sound::{create_player, SoundCue, SoundPlayer};
use crate::types::Command;

/// Plays the cue when a session completes, logging instead of failing.
struct Notifier {
    player: Option<Box<dyn SoundPlayer>>,
    cue: SoundCue,
}

impl Notifier {
    fn from_args(args: &RunArgs) -> Result<Self> {
        let cue = match &args.sound {
            Some(path) => SoundCue::from_path(path).map_err(|e| {
                anyhow::anyhow!("{} ({})", e, e.suggestion())
            })?,
            None => SoundCue::default(),
        };
        let player = create_player(args.no_sound);
        if let Some(player) = &player {
            debug!(output = player.describe(), cue = %cue.name(), "Sound cue ready");
        }
        Ok(Self { player, cue })
    }

    fn on_update(&self, update: &EngineUpdate) {
        let TimerEvent::SessionCompleted { completed, .. } = &update.event else {
            return;
        };
        let Some(player) = &self.player else {
            return;
        };
        if let Err(e) = player.play(&self.cue) {
            warn!(
                "Could not play cue after {}: {} ({})",
                completed.label(),
                e,
                e.suggestion()
            );
        }
    }
}

/// Runs the interactive timer until the user quits or input ends.
pub async fn run(args: &RunArgs) -> Result<()> {
    let config = args.session_config()?;
    let notifier = Notifier::from_args(args)?;
    let display = Display::new(if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    });

    let (command_tx, command_rx) = mpsc::unbounded_channel::<Command>();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<EngineUpdate>();

    let engine = TimerEngine::new(config, update_tx);
    display.show_header(&engine.view())?;

    let period = Duration::from_millis(args.tick_millis);
    let engine_task = tokio::spawn(engine.run(command_rx, period));
    info!(
        focus_minutes = config.focus_minutes(),
        break_minutes = config.break_minutes(),
        "Timer ready"
    );

    let mut lines = spawn_stdin_reader();
    let mut command_tx = Some(command_tx);
    // One future for the whole loop so a Ctrl-C between polls is not lost
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    loop {
        tokio::select! {
            update = update_rx.recv() => {
                // None once the engine task has finished and dropped its sender
                let Some(update) = update else { break };
                display.show_update(&update)?;
                notifier.on_update(&update);
            }
            line = lines.recv(), if command_tx.is_some() => {
                let input = match line {
                    Some(line) => parse_input(&line),
                    None => Ok(Input::Quit),
                };
                match input {
                    Ok(Input::Command(command)) => {
                        if let Some(tx) = &command_tx {
                            tx.send(command).context("Timer task is not running")?;
                        }
                    }
                    Ok(Input::Help) => display.show_help()?,
                    Ok(Input::Empty) => {}
                    Ok(Input::Quit) => {
                        debug!("Quit requested");
                        command_tx = None;
                    }
                    Err(e) => display.show_error(&e.to_string())?,
                }
            }
            _ = &mut interrupted, if command_tx.is_some() => {
                debug!("Interrupted");
                command_tx = None;
            }
        }
    }

    engine_task
        .await
        .context("Timer task panicked")?
        .context("Timer task failed")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::engine::PomodoroState;
    use crate::sound::MockSoundPlayer;
    use crate::types::{Session, SessionConfig, SessionKind};
    use crate::view::View;

    fn notifier_with(mock: &Arc<MockSoundPlayer>) -> Notifier {
        Notifier {
            player: Some(Box::new(Arc::clone(mock))),
            cue: SoundCue::Chime,
        }
    }

    fn update(event: TimerEvent) -> EngineUpdate {
        EngineUpdate {
            event,
            view: View::from_state(&PomodoroState::new(SessionConfig::default())),
        }
    }

    fn completed() -> EngineUpdate {
        update(TimerEvent::SessionCompleted {
            completed: SessionKind::Focusing,
            next: Session::new(SessionKind::OnBreak, 300),
        })
    }

    #[test]
    fn test_cue_plays_only_on_completion() {
        let mock = Arc::new(MockSoundPlayer::new());
        let notifier = notifier_with(&mock);

        notifier.on_update(&update(TimerEvent::SessionStarted {
            session: Session::new(SessionKind::Focusing, 1500),
        }));
        notifier.on_update(&update(TimerEvent::Tick {
            remaining_seconds: 1,
        }));
        notifier.on_update(&update(TimerEvent::Tick {
            remaining_seconds: 0,
        }));
        assert_eq!(mock.play_count(), 0);

        notifier.on_update(&completed());
        notifier.on_update(&update(TimerEvent::Paused));
        notifier.on_update(&update(TimerEvent::Stopped));

        assert_eq!(mock.get_play_calls(), vec!["chime"]);
    }

    #[test]
    fn test_cue_plays_on_every_completion() {
        let mock = Arc::new(MockSoundPlayer::new());
        let notifier = notifier_with(&mock);

        notifier.on_update(&completed());
        notifier.on_update(&update(TimerEvent::SessionCompleted {
            completed: SessionKind::OnBreak,
            next: Session::new(SessionKind::Focusing, 1500),
        }));

        assert_eq!(mock.play_count(), 2);
    }

    #[test]
    fn test_playback_failure_is_not_fatal() {
        let mock = Arc::new(MockSoundPlayer::new());
        mock.set_should_fail(true);
        let notifier = notifier_with(&mock);

        notifier.on_update(&completed());
        assert_eq!(mock.play_count(), 0);

        mock.set_should_fail(false);
        notifier.on_update(&completed());
        assert_eq!(mock.play_count(), 1);
    }

    #[test]
    fn test_no_player_when_sound_disabled() {
        let args = RunArgs {
            no_sound: true,
            ..RunArgs::default()
        };
        let notifier = Notifier::from_args(&args).unwrap();

        assert!(notifier.player.is_none());
        assert!(notifier.cue.is_chime());
        notifier.on_update(&completed());
    }

    #[test]
    fn test_missing_sound_file_is_rejected() {
        let args = RunArgs {
            sound: Some("/nonexistent/cue.wav".into()),
            no_sound: true,
            ..RunArgs::default()
        };

        let err = Notifier::from_args(&args).err().unwrap();

        assert!(err.to_string().contains("sound file not found"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_from_engine_reaches_notifier() {
        let mock = Arc::new(MockSoundPlayer::new());
        let notifier = notifier_with(&mock);
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(SessionConfig::new(5, 1).unwrap(), update_tx);
        let task = tokio::spawn(engine.run(command_rx, Duration::from_secs(1)));

        command_tx.send(Command::PlayPause).unwrap();
        let mut completions = 0;
        while completions < 2 {
            let update = update_rx.recv().await.unwrap();
            if matches!(update.event, TimerEvent::SessionCompleted { .. }) {
                completions += 1;
            }
            notifier.on_update(&update);
        }

        assert_eq!(mock.play_count(), 2);
        drop(command_tx);
        task.await.unwrap().unwrap();
    }
}
