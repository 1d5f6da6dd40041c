//! Keyboard input for the interactive timer.
//!
//! Each line typed by the user maps to one [`Input`]. Stdin is read on a
//! plain OS thread because a blocking read cannot be cancelled; the thread
//! simply dies with the process.

use std::io::BufRead;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use crate::types::Command;

/// Key reference printed on startup and on `help`.
pub const KEY_HELP: &str = "keys: p=play/pause  s=stop  f+/f-=focus ±5  b+/b-=break ±1  h=help  q=quit";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the engine
    Command(Command),
    /// Print the key reference
    Help,
    /// Leave the timer
    Quit,
    /// Blank line
    Empty,
}

/// Errors from parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown input '{0}' (type h for help)")]
    Unknown(String),
}

/// Parses one line of user input.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let token = line.trim().to_ascii_lowercase();
    let input = match token.as_str() {
        "" => Input::Empty,
        "p" | "space" | "play" | "pause" => Input::Command(Command::PlayPause),
        "s" | "stop" => Input::Command(Command::Stop),
        "f+" | "+f" => Input::Command(Command::IncreaseFocus),
        "f-" | "-f" => Input::Command(Command::DecreaseFocus),
        "b+" | "+b" => Input::Command(Command::IncreaseBreak),
        "b-" | "-b" => Input::Command(Command::DecreaseBreak),
        "h" | "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => return Err(InputError::Unknown(line.trim().to_string())),
    };
    Ok(input)
}

/// Forwards stdin lines over a channel from a detached thread.
///
/// The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Input reader finished");
    });
    rx
}
