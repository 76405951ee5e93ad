//! Batch runner
//!
//! Turns the validated configuration into one recording session per stream,
//! launches them back-to-back as independent tasks, and waits for all of
//! them. Per-session progress bars are multiplexed through a single
//! `MultiProgress` so concurrent sessions each own one console line.

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::plan::resolve_output_path;
use crate::recorder::{RecordingRequest, RecordingSession, SessionOutcome, SessionReport};

fn session_bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        " {prefix} [{bar:40}] {percent:>3}% | ETA: {msg} | {pos}/{len}s",
    )
    .expect("valid progress template")
    .progress_chars("█░")
}

/// Record every configured stream to completion and return the collected
/// reports.
///
/// A path-planning failure for one stream is logged and skips that stream
/// only; it never aborts the siblings.
pub async fn run_batch(config: &Config) -> Result<Vec<SessionReport>> {
    let entries = config.stream_entries()?;
    let base_dir = config.base_dir();

    let multi = MultiProgress::new();
    let style = session_bar_style();

    let mut handles: Vec<JoinHandle<SessionReport>> = Vec::new();
    let mut skipped = 0usize;

    for entry in entries {
        let output_path = match resolve_output_path(
            &base_dir,
            &entry.streamer_id,
            &config.output.suffix,
            config.recorder.max_path_probes,
        ) {
            Ok(path) => path,
            Err(e) => {
                error!("Skipping {}: {}", entry.streamer_id, e);
                skipped += 1;
                continue;
            }
        };

        let bar = multi.add(ProgressBar::new(entry.total_secs));
        bar.set_style(style.clone());
        bar.set_prefix(entry.streamer_id.clone());
        bar.set_message("--:--:--");

        let request = RecordingRequest {
            streamer_id: entry.streamer_id,
            source_url: entry.source_url,
            duration_text: entry.duration_text,
            total_secs: entry.total_secs,
            output_path,
        };
        let session =
            RecordingSession::new(config.recorder.ffmpeg_path.clone(), request, bar);
        handles.push(tokio::spawn(session.record()));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(report) => reports.push(report),
            Err(e) => error!("Recording task panicked: {}", e),
        }
    }

    summarize(&reports, skipped);
    Ok(reports)
}

fn summarize(reports: &[SessionReport], skipped: usize) {
    let completed = reports
        .iter()
        .filter(|r| r.outcome == SessionOutcome::Completed)
        .count();
    info!(
        "Batch finished: {} completed, {} failed, {} skipped",
        completed,
        reports.len() - completed,
        skipped
    );

    for report in reports {
        match &report.outcome {
            SessionOutcome::Completed => {}
            SessionOutcome::Failed { code: Some(code) } => warn!(
                "{}: ffmpeg exited with code {} (partial file kept at {})",
                report.streamer_id,
                code,
                report.output_path.display()
            ),
            SessionOutcome::Failed { code: None } => warn!(
                "{}: ffmpeg was terminated by a signal (partial file kept at {})",
                report.streamer_id,
                report.output_path.display()
            ),
            SessionOutcome::SpawnError { message } => {
                warn!("{}: could not start ffmpeg: {}", report.streamer_id, message)
            }
        }
    }
}
