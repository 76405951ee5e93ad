use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use indicatif::ProgressBar;
use tokio::io::AsyncReadExt;
use tokio::process::ChildStderr;
use tracing::{error, info, warn};

use super::command::build_record_command;
use crate::progress::{parse_progress_marker, EtaEstimate};

/// One stream to record. Immutable once constructed, consumed once by a
/// [`RecordingSession`].
#[derive(Debug, Clone)]
pub struct RecordingRequest {
    pub streamer_id: String,
    pub source_url: String,
    /// Raw `H:MM:SS` duration handed to ffmpeg's `-t` flag
    pub duration_text: String,
    /// The same duration precomputed as total seconds for the progress bar
    pub total_secs: u64,
    pub output_path: PathBuf,
}

/// Terminal status of one recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// ffmpeg exited with status 0
    Completed,
    /// ffmpeg started but exited non-zero; the code is `None` when the
    /// process was killed by a signal
    Failed { code: Option<i32> },
    /// ffmpeg could not be started at all
    SpawnError { message: String },
}

/// What one session produced, collected by the batch runner.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub streamer_id: String,
    pub output_path: PathBuf,
    pub outcome: SessionOutcome,
    pub wall_clock: Duration,
}

/// A recording session that owns one ffmpeg subprocess for one stream and
/// drives a progress bar from the `time=` markers on its stderr.
pub struct RecordingSession {
    ffmpeg_path: String,
    request: RecordingRequest,
    bar: ProgressBar,
}

impl RecordingSession {
    pub fn new(ffmpeg_path: String, request: RecordingRequest, bar: ProgressBar) -> Self {
        bar.set_length(request.total_secs);
        Self {
            ffmpeg_path,
            request,
            bar,
        }
    }

    /// Run the session to its terminal state.
    ///
    /// Never returns an error: every failure mode is folded into the report
    /// so sibling sessions are unaffected. The partial output file, if any,
    /// is left on disk as-is; there is no cleanup and no retry.
    pub async fn record(self) -> SessionReport {
        let started = Instant::now();

        info!(
            "Recording {} for {} -> {}",
            self.request.streamer_id,
            self.request.duration_text,
            self.request.output_path.display()
        );

        let mut child = match build_record_command(&self.ffmpeg_path, &self.request).spawn() {
            Ok(child) => child,
            Err(e) => {
                self.bar.abandon();
                error!(
                    "Failed to start ffmpeg for {}: {}",
                    self.request.streamer_id, e
                );
                return self.report(
                    SessionOutcome::SpawnError {
                        message: e.to_string(),
                    },
                    started,
                );
            }
        };

        if let Some(stderr) = child.stderr.take() {
            self.consume_diagnostics(stderr, started).await;
        }

        // stderr is closed by now, so this is the last event for the session.
        match child.wait().await {
            Ok(status) if status.success() => {
                self.bar.finish();
                info!(
                    "Recording of {} completed, saved to {}",
                    self.request.streamer_id,
                    self.request.output_path.display()
                );
                self.report(SessionOutcome::Completed, started)
            }
            Ok(status) => {
                self.bar.abandon();
                error!(
                    "ffmpeg for {} exited with {}",
                    self.request.streamer_id, status
                );
                self.report(
                    SessionOutcome::Failed {
                        code: status.code(),
                    },
                    started,
                )
            }
            Err(e) => {
                self.bar.abandon();
                error!(
                    "Failed waiting for ffmpeg for {}: {}",
                    self.request.streamer_id, e
                );
                self.report(SessionOutcome::Failed { code: None }, started)
            }
        }
    }

    // ffmpeg terminates progress lines with `\r`, so read raw chunks rather
    // than waiting for newlines.
    async fn consume_diagnostics(&self, mut stderr: ChildStderr, started: Instant) {
        let mut buf = [0u8; 4096];
        loop {
            match stderr.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    let chunk = String::from_utf8_lossy(&buf[..n]);
                    self.observe_chunk(&chunk, started.elapsed());
                }
                Err(e) => {
                    warn!(
                        "Failed to read ffmpeg stderr for {}: {}",
                        self.request.streamer_id, e
                    );
                    break;
                }
            }
        }
    }

    /// Advance progress from one stderr chunk. Chunks without a `time=`
    /// marker are ignored and leave the displayed state untouched.
    fn observe_chunk(&self, chunk: &str, wall_elapsed: Duration) {
        let Some(elapsed) = parse_progress_marker(chunk) else {
            return;
        };
        self.bar.set_position(elapsed);
        let eta = EtaEstimate::project(
            Local::now(),
            wall_elapsed,
            elapsed,
            self.request.total_secs,
        );
        self.bar.set_message(eta.clock_label());
    }

    fn report(self, outcome: SessionOutcome, started: Instant) -> SessionReport {
        SessionReport {
            streamer_id: self.request.streamer_id,
            output_path: self.request.output_path,
            outcome,
            wall_clock: started.elapsed(),
        }
    }
}
