//! CLI module for the Pomodoro clock.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Keyboard line parsing and the stdin reader
//! - `display`: Output formatting and display logic
//! - `runner`: The interactive session loop

pub mod commands;
pub mod display;
pub mod input;
pub mod runner;

pub use commands::{Cli, Commands, RunArgs};
pub use display::{Display, OutputFormat};
pub use input::{parse_input, Input, InputError};
