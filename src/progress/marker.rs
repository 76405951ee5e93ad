use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Hours may be multi-digit, minutes and seconds are exactly two.
static TIME_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"time=(\d+):(\d{2}):(\d{2})").expect("valid marker pattern"));

/// Extract the `time=H:MM:SS` marker embedded anywhere in an ffmpeg stderr
/// chunk and return the elapsed seconds it implies. A chunk can carry several
/// progress lines when reads coalesce; the newest marker wins. Chunks without
/// a marker return `None`; they carry no progress information.
pub fn parse_progress_marker(chunk: &str) -> Option<u64> {
    let caps = TIME_MARKER.captures_iter(chunk).last()?;
    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Parse a configured `H:MM:SS` duration into total seconds. Hour components
/// need not be zero-padded.
pub fn parse_clock_duration(text: &str) -> Result<u64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        bail!("duration {text:?} is not in H:MM:SS form");
    }
    let hours: u64 = parts[0]
        .parse()
        .with_context(|| format!("invalid hours in duration {text:?}"))?;
    let minutes: u64 = parts[1]
        .parse()
        .with_context(|| format!("invalid minutes in duration {text:?}"))?;
    let seconds: u64 = parts[2]
        .parse()
        .with_context(|| format!("invalid seconds in duration {text:?}"))?;
    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|t| t.checked_add(seconds))
        .with_context(|| format!("duration {text:?} overflows"))
}
