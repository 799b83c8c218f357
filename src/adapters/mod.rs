//! Sink adapters.
//!
//! - [`writer`]: any `io::Write`, used for stdout.
//! - [`channel`]: an in-memory channel for capturing a run.
//! - [`recording`]: tees into a transcript while forwarding to another sink.

pub mod channel;
pub mod recording;
pub mod writer;

pub use channel::ChannelSink;
pub use recording::RecordingSink;
pub use writer::WriterSink;
