//! Sound player implementations.
//!
//! `RodioSoundPlayer` plays cues through the default output device using
//! rodio. `TerminalBell` rings the terminal bell for machines without one.

use std::io::{Cursor, Write};
use std::time::Duration;

use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use super::cue::{SoundCue, CHIME_DURATION_MS, CHIME_FREQUENCY_HZ};
use super::error::SoundError;
use super::SoundPlayer;

/// A sound player that uses rodio for audio playback.
///
/// Playback is non-blocking; the sink is detached and keeps playing after
/// `play` returns.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
}

impl RodioSoundPlayer {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    fn new_sink(&self) -> Result<Sink, SoundError> {
        Sink::try_new(&self.stream_handle).map_err(|e| SoundError::StreamError(e.to_string()))
    }

    fn play_chime(&self) -> Result<(), SoundError> {
        let tone = SineWave::new(CHIME_FREQUENCY_HZ)
            .take_duration(Duration::from_millis(CHIME_DURATION_MS))
            .amplify(0.25);

        let sink = self.new_sink()?;
        sink.append(tone);
        sink.detach();
        Ok(())
    }

    fn play_data(&self, data: &std::sync::Arc<[u8]>) -> Result<(), SoundError> {
        let decoder = Decoder::new(Cursor::new(std::sync::Arc::clone(data)))
            .map_err(|e| SoundError::DecodeError(e.to_string()))?;

        let sink = self.new_sink()?;
        sink.append(decoder);
        sink.detach();
        Ok(())
    }
}

impl SoundPlayer for RodioSoundPlayer {
    /// Plays the cue; a file cue that fails falls back to the chime.
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        match cue {
            SoundCue::Chime => self.play_chime(),
            SoundCue::File { path, data } => match self.play_data(data) {
                Ok(()) => Ok(()),
                Err(e) => {
                    warn!(
                        "Failed to play '{}': {}, falling back to chime",
                        path.display(),
                        e
                    );
                    self.play_chime()
                }
            },
        }
    }

    fn describe(&self) -> &'static str {
        "audio"
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer").finish_non_exhaustive()
    }
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, _cue: &SoundCue) -> Result<(), SoundError> {
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|e| SoundError::PlaybackError(e.to_string()))
    }

    fn describe(&self) -> &'static str {
        "terminal bell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rodio tests skip themselves on machines without audio hardware.

    #[test]
    fn test_rodio_chime_when_available() {
        let player = match RodioSoundPlayer::new() {
            Ok(p) => p,
            Err(e) => {
                assert!(e.is_device_error());
                return;
            }
        };

        assert!(player.play(&SoundCue::Chime).is_ok());
        assert_eq!(player.describe(), "audio");
    }

    #[test]
    fn test_rodio_debug_impl() {
        let player = match RodioSoundPlayer::new() {
            Ok(p) => p,
            Err(_) => return,
        };

        assert!(format!("{:?}", player).contains("RodioSoundPlayer"));
    }

    #[test]
    fn test_terminal_bell() {
        let bell = TerminalBell;
        assert!(bell.play(&SoundCue::Chime).is_ok());
        assert_eq!(bell.describe(), "terminal bell");
    }
}
