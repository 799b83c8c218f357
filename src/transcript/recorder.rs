//! Records emitted lines into a transcript file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Transcript, TranscriptLine};
use crate::generator::Line;

/// Collects lines and writes them as a YAML transcript.
#[derive(Debug)]
pub struct TranscriptRecorder {
    path: PathBuf,
    name: String,
    players: Vec<String>,
    lines: Vec<TranscriptLine>,
}

impl TranscriptRecorder {
    /// Create a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, players: Vec<String>) -> Self {
        Self { path: path.into(), name: name.into(), players, lines: Vec::new() }
    }

    /// Append a line.
    pub fn record(&mut self, line: &Line) {
        self.lines.push(TranscriptLine::from(line));
    }

    /// Number of lines recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the transcript to disk and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let transcript = Transcript {
            name: self.name,
            recorded_at: Utc::now(),
            players: self.players,
            lines: self.lines,
        };
        let yaml = serde_yaml::to_string(&transcript).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
