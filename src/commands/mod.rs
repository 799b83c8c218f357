//! Command dispatch and handlers.

pub mod hello;
pub mod play;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Play(args) => play::run(args),
        Command::Hello { entry } => hello::run(*entry),
    }
}
