//! Sound cue sources.
//!
//! A cue is either the built-in synthesized chime or an audio file chosen by
//! the user. File cues are read and decode-checked when they are created so a
//! bad path is reported at startup, not at the end of the first session.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::Decoder;

use super::error::SoundError;

/// Pitch of the built-in chime.
pub const CHIME_FREQUENCY_HZ: f32 = 880.0;
/// Length of the built-in chime.
pub const CHIME_DURATION_MS: u64 = 350;

/// What to play when a session completes.
#[derive(Debug, Clone)]
pub enum SoundCue {
    /// Short sine tone synthesized at playback time
    Chime,
    /// A user-supplied audio file held in memory
    File {
        /// Where the file was read from
        path: PathBuf,
        /// Raw encoded bytes
        data: Arc<[u8]>,
    },
}

impl SoundCue {
    /// Loads an audio file cue.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::FileNotFound` if the file cannot be read and
    /// `SoundError::DecodeError` if rodio does not recognise its format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SoundError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;
        let data: Arc<[u8]> = Arc::from(bytes);

        Decoder::new(Cursor::new(Arc::clone(&data)))
            .map_err(|e| SoundError::DecodeError(format!("{}: {}", path.display(), e)))?;

        Ok(Self::File {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Returns a short name for log messages.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Chime => "chime".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    #[must_use]
    pub fn is_chime(&self) -> bool {
        matches!(self, Self::Chime)
    }
}

impl Default for SoundCue {
    fn default() -> Self {
        Self::Chime
    }
}
