//! Launching and joining a background worker thread.
//!
//! A worker is started from an [`Entry`] and controlled through the returned
//! [`WorkerHandle`]. Cancellation is cooperative: the entry receives a
//! [`StopToken`] and is expected to check it between units of work.

pub mod entry;
pub mod launcher;
pub mod stop;

pub use entry::Entry;
pub use launcher::{spawn, Launcher, WorkerHandle};
pub use stop::StopToken;
