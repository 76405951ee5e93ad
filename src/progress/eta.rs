use chrono::{DateTime, Duration as ChronoDuration, Local};
use std::time::Duration;

/// Estimated wall-clock completion time for a recording session.
///
/// Derived by linear extrapolation: the estimated total run time is
/// `wall_elapsed * (total / elapsed)`, added to "now". While no stream time
/// has elapsed yet there is nothing to extrapolate from, so the estimate is
/// `Unknown` rather than a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtaEstimate {
    Unknown,
    At(DateTime<Local>),
}

impl EtaEstimate {
    pub fn project(
        now: DateTime<Local>,
        wall_elapsed: Duration,
        elapsed_secs: u64,
        total_secs: u64,
    ) -> Self {
        if elapsed_secs == 0 {
            return Self::Unknown;
        }
        let estimated_total =
            wall_elapsed.as_secs_f64() * (total_secs as f64 / elapsed_secs as f64);
        let offset = match ChronoDuration::try_milliseconds((estimated_total * 1000.0) as i64) {
            Some(offset) => offset,
            None => return Self::Unknown,
        };
        match now.checked_add_signed(offset) {
            Some(at) => Self::At(at),
            None => Self::Unknown,
        }
    }

    /// Zero-padded `HH:MM:SS` local clock string, or `--:--:--` when unknown.
    pub fn clock_label(&self) -> String {
        match self {
            Self::Unknown => "--:--:--".to_string(),
            Self::At(at) => at.format("%H:%M:%S").to_string(),
        }
    }
}
