//! `chorus hello` command: one greeter thread per kind of entry point.

use std::io::{self, Write};

use crate::cli::EntryKind;
use crate::error::WorkerError;
use crate::worker::{Entry, Launcher, StopToken, WorkerHandle};

/// Entry point written as a plain function.
fn hello(_stop: StopToken) -> String {
    "Hello, Thread".to_string()
}

/// Entry point written as an object with its own state.
struct Greeter {
    kind: &'static str,
}

impl Entry for Greeter {
    type Output = String;

    fn run(self, _stop: StopToken) -> String {
        format!("Hello, {} Thread", self.kind)
    }
}

/// Launch the greeters selected by `kind` and collect their greetings in
/// launch order.
///
/// # Errors
///
/// Returns a [`WorkerError`] if a thread cannot be spawned or panics.
pub fn greetings(kind: EntryKind) -> Result<Vec<String>, WorkerError> {
    let mut handles: Vec<WorkerHandle<String>> = Vec::new();

    if matches!(kind, EntryKind::Function | EntryKind::All) {
        handles.push(Launcher::new().name("hello-function").spawn(hello)?);
    }
    if matches!(kind, EntryKind::Functor | EntryKind::All) {
        handles.push(Launcher::new().name("hello-functor").spawn(Greeter { kind: "Functor" })?);
    }
    if matches!(kind, EntryKind::Closure | EntryKind::All) {
        let greeting = String::from("Hello, Lambda Thread");
        handles.push(Launcher::new().name("hello-closure").spawn(move |_stop: StopToken| greeting)?);
    }

    handles.into_iter().map(WorkerHandle::join).collect()
}

/// Execute the `hello` command.
///
/// # Errors
///
/// Returns an error string if any greeter thread fails.
pub fn run(kind: EntryKind) -> Result<(), String> {
    let greetings = greetings(kind).map_err(|e| e.to_string())?;
    print_greetings(io::stdout().lock(), &greetings)
}

/// Write one greeting per line. A closed reader ends output quietly.
fn print_greetings<W: Write>(mut out: W, greetings: &[String]) -> Result<(), String> {
    for greeting in greetings {
        match writeln!(out, "{greeting}") {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(err) => return Err(format!("failed to write greeting: {err}")),
        }
    }
    match out.flush() {
        Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
            Err(format!("failed to write greeting: {err}"))
        }
        _ => Ok(()),
    }
}
