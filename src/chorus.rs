//! The worker loop: drive a [`Generator`] into a sink until told to stop.
//!
//! [`run_chorus`] is the loop itself. [`launch`] runs it on a worker thread,
//! optionally teeing lines into a transcript, and returns a [`ChorusSession`]
//! to cancel or join.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::adapters::RecordingSink;
use crate::config::PlaySettings;
use crate::error::{ChorusError, ConfigError, SinkError};
use crate::generator::{Generator, Roster};
use crate::ports::sink::LineSink;
use crate::transcript::TranscriptRecorder;
use crate::worker::{Launcher, StopToken, WorkerHandle};

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop token was cancelled.
    Cancelled,
    /// The configured number of lines was emitted.
    LimitReached,
    /// The sink reported that nobody is listening.
    SinkClosed,
    /// The counter ran out of `u64` range.
    Exhausted,
}

/// Summary returned when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChorusReport {
    /// Lines successfully emitted.
    pub emitted: u64,
    /// Why the loop ended.
    pub reason: StopReason,
}

/// Emit chorus lines into `sink` until cancelled, `limit` lines are out, or
/// the sink closes.
///
/// With no limit and no cancellation this never returns.
///
/// # Errors
///
/// Returns any sink error other than [`SinkError::Closed`].
pub fn run_chorus<S: LineSink>(
    roster: Roster,
    limit: Option<u64>,
    mut sink: S,
    stop: &StopToken,
) -> Result<ChorusReport, SinkError> {
    let mut emitted = 0u64;
    let mut lines = Generator::new(roster);

    let reason = loop {
        if stop.is_cancelled() {
            break StopReason::Cancelled;
        }
        if limit.is_some_and(|limit| emitted >= limit) {
            break StopReason::LimitReached;
        }
        let Some(line) = lines.next() else {
            break StopReason::Exhausted;
        };
        match sink.emit(&line) {
            Ok(()) => {
                tracing::trace!(seq = line.seq, player = %line.player, "line emitted");
                emitted += 1;
            }
            Err(SinkError::Closed) => {
                tracing::debug!(emitted, "sink closed");
                break StopReason::SinkClosed;
            }
            Err(err) => return Err(err),
        }
    };

    match sink.flush() {
        Ok(()) | Err(SinkError::Closed) => {}
        Err(err) => return Err(err),
    }
    tracing::info!(emitted, ?reason, "chorus stopped");
    Ok(ChorusReport { emitted, reason })
}

/// A chorus running on its worker thread.
pub struct ChorusSession {
    handle: WorkerHandle<Result<ChorusReport, SinkError>>,
    recorder: Option<Arc<Mutex<TranscriptRecorder>>>,
}

/// Outcome of a joined session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChorusOutcome {
    /// What the worker reported.
    pub report: ChorusReport,
    /// Path of the written transcript, when recording.
    pub transcript: Option<PathBuf>,
}

/// Spawn the chorus worker writing into `sink`.
///
/// # Errors
///
/// Returns [`ConfigError::RecordWithoutLimit`] when recording an unbounded
/// run, or [`ChorusError::Worker`] if the thread cannot be started.
pub fn launch<S>(settings: &PlaySettings, sink: S) -> Result<ChorusSession, ChorusError>
where
    S: LineSink + 'static,
{
    if settings.record.is_some() && settings.limit.is_none() {
        return Err(ConfigError::RecordWithoutLimit.into());
    }

    let recorder = settings.record.as_ref().map(|path| {
        let name = format!("chorus-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        Arc::new(Mutex::new(TranscriptRecorder::new(
            path,
            name,
            settings.roster.names().to_vec(),
        )))
    });

    let sink: Box<dyn LineSink> = match &recorder {
        Some(recorder) => Box::new(RecordingSink::new(sink, Arc::clone(recorder))),
        None => Box::new(sink),
    };

    let roster = settings.roster.clone();
    let limit = settings.limit;
    let handle =
        Launcher::new().spawn(move |stop: StopToken| run_chorus(roster, limit, sink, &stop))?;

    Ok(ChorusSession { handle, recorder })
}

impl ChorusSession {
    /// Ask the worker to stop after its current line.
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    /// Token observed by the worker; cancelling it stops the chorus.
    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.handle.stop_token()
    }

    /// Wait for the worker, then write the transcript if recording.
    ///
    /// When the sink failed, the lines emitted before the failure are still
    /// written to the transcript before the sink error is returned.
    ///
    /// Blocks forever for an unbounded run that is never cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker panicked, its sink failed, or the
    /// transcript could not be written.
    pub fn join(self) -> Result<ChorusOutcome, ChorusError> {
        let result = self.handle.join()?;
        let transcript = match self.recorder {
            Some(recorder) => Some(finish_transcript(recorder)?),
            None => None,
        };
        if let (Err(err), Some(path)) = (&result, &transcript) {
            tracing::warn!(%err, path = %path.display(), "sink failed; partial transcript written");
        }
        Ok(ChorusOutcome { report: result?, transcript })
    }
}

fn finish_transcript(recorder: Arc<Mutex<TranscriptRecorder>>) -> Result<PathBuf, ChorusError> {
    let recorder = Arc::try_unwrap(recorder)
        .map_err(|_| ChorusError::Transcript("recorder still has references".to_string()))?
        .into_inner()
        .map_err(|e| ChorusError::Transcript(format!("recorder lock poisoned: {e}")))?;
    recorder
        .finish()
        .map_err(|e| ChorusError::Transcript(format!("failed to write transcript: {e}")))
}
