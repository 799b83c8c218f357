//! Sink writing rendered lines to an `io::Write`.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::SinkError;
use crate::generator::Line;
use crate::ports::sink::LineSink;

/// JSON shape of one line.
#[derive(Serialize)]
struct JsonLine<'a> {
    seq: u64,
    player: &'a str,
    says: String,
}

/// Writes each line to `W`, flushing after every line.
///
/// The worker may run forever, so lines must reach the reader as they are
/// produced rather than when a buffer fills.
pub struct WriterSink<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `out`, rendering lines in `format`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, line: &Line) -> Result<String, SinkError> {
        match self.format {
            OutputFormat::Text => Ok(line.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&JsonLine {
                seq: line.seq,
                player: &line.player,
                says: line.verdict.to_string(),
            })?),
        }
    }
}

impl WriterSink<io::Stdout> {
    /// Sink on the process's standard output.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &Line) -> Result<(), SinkError> {
        let rendered = self.render(line)?;
        writeln!(self.out, "{rendered}").map_err(classify)?;
        self.out.flush().map_err(classify)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush().map_err(classify)
    }
}

fn classify(err: io::Error) -> SinkError {
    if err.kind() == io::ErrorKind::BrokenPipe {
        SinkError::Closed
    } else {
        SinkError::Io(err)
    }
}
