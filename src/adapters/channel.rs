//! Sink forwarding lines over an in-memory channel.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::SinkError;
use crate::generator::Line;
use crate::ports::sink::LineSink;

/// Sends each emitted line to a [`Receiver`].
///
/// Dropping the receiver closes the sink, which in turn stops the worker.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Line>,
}

impl ChannelSink {
    /// Create a sink and the receiving end of its channel.
    #[must_use]
    pub fn open() -> (Self, Receiver<Line>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl LineSink for ChannelSink {
    fn emit(&mut self, line: &Line) -> Result<(), SinkError> {
        self.tx.send(line.clone()).map_err(|_| SinkError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Generator, Roster};

    #[test]
    fn delivers_lines_in_order() {
        let (mut sink, rx) = ChannelSink::open();
        for line in Generator::new(Roster::default()).take(3) {
            sink.emit(&line).unwrap();
        }
        drop(sink);
        let seqs: Vec<u64> = rx.iter().map(|l| l.seq).collect();
        assert_eq!(seqs, [1, 2, 3]);
    }

    #[test]
    fn dropped_receiver_closes_sink() {
        let (mut sink, rx) = ChannelSink::open();
        drop(rx);
        let line = Generator::new(Roster::default()).next().unwrap();
        assert!(matches!(sink.emit(&line), Err(SinkError::Closed)));
    }
}
