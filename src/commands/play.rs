//! `chorus play` command.

use crate::adapters::WriterSink;
use crate::chorus;
use crate::cli::PlayArgs;
use crate::config::PlaySettings;

/// Execute the `play` command.
///
/// Spawns the chorus worker on stdout and blocks until it ends. Without a
/// limit that only happens when stdout closes or the process is killed.
///
/// # Errors
///
/// Returns an error string for invalid settings or a failed worker.
pub fn run(args: &PlayArgs) -> Result<(), String> {
    let settings = PlaySettings::from_env(args).map_err(|e| e.to_string())?;
    tracing::debug!(
        players = settings.roster.len(),
        limit = ?settings.limit,
        format = %settings.format,
        "starting chorus"
    );

    let session =
        chorus::launch(&settings, WriterSink::stdout(settings.format)).map_err(|e| e.to_string())?;
    let outcome = session.join().map_err(|e| e.to_string())?;

    if let Some(path) = outcome.transcript {
        eprintln!("Transcript saved to: {}", path.display());
    }
    Ok(())
}
