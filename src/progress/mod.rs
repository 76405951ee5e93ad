//! Progress parsing and ETA estimation
//!
//! This module is the only place that knows the exact shape of ffmpeg's
//! diagnostic output:
//! - Extracting `time=H:MM:SS` markers from stderr chunks
//! - Parsing configured `H:MM:SS` durations
//! - Projecting an estimated wall-clock completion time

mod eta;
mod marker;

pub use eta::EtaEstimate;
pub use marker::{parse_clock_duration, parse_progress_marker};
