//! Sound cue playback for the Pomodoro clock.
//!
//! The clock itself is silent. When the engine reports a completed session,
//! the presentation layer hands the configured [`SoundCue`] to a
//! [`SoundPlayer`]. Playback is fire-and-forget: failures are logged and the
//! timer keeps going.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundPlayer    │ ← Main interface
//! └────────┬─────────┘
//!          │
//!          ├──▶ RodioSoundPlayer  (default output device)
//!          ├──▶ TerminalBell      (no audio device)
//!          └──▶ MockSoundPlayer   (tests)
//! ```

mod cue;
mod error;
mod player;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::warn;

pub use cue::SoundCue;
pub use error::SoundError;
pub use player::{RodioSoundPlayer, TerminalBell};

/// Trait for sound playback implementations.
pub trait SoundPlayer {
    /// Plays a cue without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError>;

    /// Short description of the output, for logs.
    fn describe(&self) -> &'static str;
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Arc<T> {
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        (**self).play(cue)
    }

    fn describe(&self) -> &'static str {
        (**self).describe()
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    /// Names of the cues played so far.
    #[must_use]
    pub fn get_play_calls(&self) -> Vec<String> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(cue.name());
        Ok(())
    }

    fn describe(&self) -> &'static str {
        "mock"
    }
}

/// Picks a player for this machine.
///
/// Returns `None` when sound is disabled. Falls back to the terminal bell if
/// no audio device can be opened.
#[must_use]
pub fn create_player(disabled: bool) -> Option<Box<dyn SoundPlayer>> {
    if disabled {
        return None;
    }
    match RodioSoundPlayer::new() {
        Ok(player) => Some(Box::new(player)),
        Err(e) => {
            warn!("Audio not available, using terminal bell: {}", e);
            Some(Box::new(TerminalBell))
        }
    }
}
