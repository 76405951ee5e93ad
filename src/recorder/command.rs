use std::process::Stdio;
use tokio::process::Command;

use super::session::RecordingRequest;

/// Build the ffmpeg invocation for one recording request: read the source
/// URL, stop after the requested duration, stream-copy without re-encoding.
///
/// stdout carries nothing of interest; progress text arrives on stderr.
pub fn build_record_command(ffmpeg_path: &str, request: &RecordingRequest) -> Command {
    let mut command = Command::new(ffmpeg_path);
    command
        .arg("-i")
        .arg(&request.source_url)
        .arg("-t")
        .arg(&request.duration_text)
        .arg("-c")
        .arg("copy")
        .arg(&request.output_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    command
}
