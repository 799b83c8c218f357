//! Sink that records every line into a transcript before forwarding it.

use std::sync::{Arc, Mutex};

use crate::error::SinkError;
use crate::generator::Line;
use crate::ports::sink::LineSink;
use crate::transcript::TranscriptRecorder;

/// Wraps another sink and tees emitted lines into a shared recorder.
///
/// Only lines the inner sink accepted are recorded.
pub struct RecordingSink<S> {
    inner: S,
    recorder: Arc<Mutex<TranscriptRecorder>>,
}

impl<S: LineSink> RecordingSink<S> {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: S, recorder: Arc<Mutex<TranscriptRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl<S: LineSink> LineSink for RecordingSink<S> {
    fn emit(&mut self, line: &Line) -> Result<(), SinkError> {
        self.inner.emit(line)?;
        match self.recorder.lock() {
            Ok(mut recorder) => recorder.record(line),
            Err(poisoned) => poisoned.into_inner().record(line),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush()
    }
}
