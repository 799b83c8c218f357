//! Error types.

use thiserror::Error;

/// Invalid run settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The roster has no players.
    #[error("roster must name at least one player")]
    EmptyRoster,
    /// A player name is blank after trimming.
    #[error("player #{} has an empty name", .0 + 1)]
    EmptyPlayer(usize),
    /// The line limit is not a positive integer.
    #[error("invalid line limit {0:?}: expected a positive integer")]
    InvalidLimit(String),
    /// The output format is unknown.
    #[error("invalid output format {0:?}: expected \"text\" or \"json\"")]
    InvalidFormat(String),
    /// A transcript was requested for a run with no line limit.
    #[error("recording a transcript requires a line limit (--limit or CHORUS_LIMIT)")]
    RecordWithoutLimit,
}

/// Failure writing a line to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The reader went away (broken pipe, dropped receiver).
    #[error("output closed")]
    Closed,
    /// Any other I/O failure.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    /// A line could not be encoded.
    #[error("failed to encode line: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure launching or joining a worker.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The OS refused to start the thread.
    #[error("failed to spawn worker: {0}")]
    Spawn(#[source] std::io::Error),
    /// The worker panicked.
    #[error("worker panicked: {0}")]
    Panicked(String),
}

/// Top-level error for a `chorus` run.
#[derive(Debug, Error)]
pub enum ChorusError {
    /// Bad settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Sink failure inside the worker.
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// Launch or join failure.
    #[error(transparent)]
    Worker(#[from] WorkerError),
    /// The transcript could not be written.
    #[error("transcript: {0}")]
    Transcript(String),
}
