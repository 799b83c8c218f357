//! Transcript of a chorus run, written as YAML.

pub mod format;
pub mod recorder;

pub use format::{Transcript, TranscriptLine};
pub use recorder::TranscriptRecorder;
