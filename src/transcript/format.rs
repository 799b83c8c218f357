//! Transcript data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generator::Line;

/// A single recorded line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Counter value.
    pub seq: u64,
    /// Player who spoke.
    pub player: String,
    /// Rendered verdict (`"7"`, `"fizz"`, ...).
    pub says: String,
}

impl From<&Line> for TranscriptLine {
    fn from(line: &Line) -> Self {
        Self { seq: line.seq, player: line.player.clone(), says: line.verdict.to_string() }
    }
}

/// A recorded run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transcript {
    /// Human-readable name for this run.
    pub name: String,
    /// When the transcript was written.
    pub recorded_at: DateTime<Utc>,
    /// Roster in turn order.
    pub players: Vec<String>,
    /// Lines in emission order.
    pub lines: Vec<TranscriptLine>,
}
