//! Recording session management
//!
//! This module provides the `RecordingSession` abstraction that manages:
//! - Building and spawning one ffmpeg invocation per stream
//! - Consuming ffmpeg's stderr and extracting `time=` progress markers
//! - Driving a per-session progress bar with an ETA estimate
//! - Reporting the terminal state (completed, failed, spawn error)

mod command;
mod session;

pub use command::build_record_command;
pub use session::{RecordingRequest, RecordingSession, SessionOutcome, SessionReport};
