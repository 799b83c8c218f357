//! Sink port receiving the lines a worker emits.

use crate::error::SinkError;
use crate::generator::Line;

/// Destination for chorus lines.
///
/// Abstracting the destination lets the same worker loop write to stdout in
/// the CLI and to an in-memory channel in tests.
pub trait LineSink: Send {
    /// Emit one line.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Closed`] when nobody is listening anymore, or
    /// another [`SinkError`] if the line could not be delivered.
    fn emit(&mut self, line: &Line) -> Result<(), SinkError>;

    /// Flush buffered output, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if buffered output cannot be written.
    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn emit(&mut self, line: &Line) -> Result<(), SinkError> {
        (**self).emit(line)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}
