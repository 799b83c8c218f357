//! Core library entry for the `chorus` CLI.
//!
//! The interesting pieces are [`worker`], which launches and joins the
//! background thread, and [`generator`], which produces the lines it emits.

pub mod adapters;
pub mod chorus;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod ports;
pub mod transcript;
pub mod worker;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
