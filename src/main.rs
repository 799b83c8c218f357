//! Binary entrypoint for the `chorus` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is the common case, not an error.
    let _ = dotenvy::dotenv();
    chorus::logging::init();

    match chorus::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
