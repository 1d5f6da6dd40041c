//! Configuration error types.

use thiserror::Error;

/// Errors raised when building a `SessionConfig` from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Focus duration outside [5,60] or not a multiple of 5.
    #[error("focus duration must be 5-60 minutes in steps of 5, got {0}")]
    InvalidFocusMinutes(u32),

    /// Break duration outside [1,15].
    #[error("break duration must be 1-15 minutes, got {0}")]
    InvalidBreakMinutes(u32),
}
