//! Spawning a named worker thread and waiting for it.

use std::any::Any;
use std::thread::{self, JoinHandle};

use super::entry::Entry;
use super::stop::StopToken;
use crate::error::WorkerError;

/// Thread name used when none is given.
pub const DEFAULT_WORKER_NAME: &str = "chorus-worker";

/// Builder for a worker thread.
#[derive(Debug, Clone)]
pub struct Launcher {
    name: String,
    stop: Option<StopToken>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self { name: DEFAULT_WORKER_NAME.to_string(), stop: None }
    }
}

impl Launcher {
    /// A launcher with the default thread name and a fresh stop token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the worker thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Use an existing stop token instead of a fresh one.
    pub fn stop_token(mut self, stop: StopToken) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Start `entry` on a new thread.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Spawn`] if the OS cannot create the thread.
    pub fn spawn<E: Entry>(self, entry: E) -> Result<WorkerHandle<E::Output>, WorkerError> {
        let stop = self.stop.unwrap_or_default();
        let token = stop.clone();
        let thread = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || entry.run(token))
            .map_err(WorkerError::Spawn)?;
        tracing::debug!(worker = %self.name, "worker spawned");
        Ok(WorkerHandle { name: self.name, thread, stop })
    }
}

/// Start `entry` on a default-named worker thread.
///
/// # Errors
///
/// Returns [`WorkerError::Spawn`] if the OS cannot create the thread.
pub fn spawn<E: Entry>(entry: E) -> Result<WorkerHandle<E::Output>, WorkerError> {
    Launcher::new().spawn(entry)
}

/// Handle to a running worker.
///
/// Dropping the handle detaches the thread; it does not cancel it.
#[derive(Debug)]
pub struct WorkerHandle<T> {
    name: String,
    thread: JoinHandle<T>,
    stop: StopToken,
}

impl<T> WorkerHandle<T> {
    /// The worker's thread name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A clone of the token the worker observes.
    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Ask the worker to stop at its next check.
    pub fn cancel(&self) {
        tracing::debug!(worker = %self.name, "cancellation requested");
        self.stop.cancel();
    }

    /// Whether the worker has already returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Block until the worker terminates.
    ///
    /// Blocks forever if the entry never returns and is never cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Panicked`] if the worker panicked.
    pub fn join(self) -> Result<T, WorkerError> {
        match self.thread.join() {
            Ok(value) => {
                tracing::debug!(worker = %self.name, "worker joined");
                Ok(value)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(worker = %self.name, %message, "worker panicked");
                Err(WorkerError::Panicked(message))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
