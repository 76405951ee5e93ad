use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::progress::parse_clock_duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub recorder: RecorderConfig,
    pub output: OutputConfig,
    pub streams: StreamsConfig,
}

#[derive(Debug, Deserialize)]
pub struct RecorderConfig {
    /// ffmpeg binary to invoke (name on PATH or an absolute path)
    pub ffmpeg_path: String,
    /// Upper bound on filename collision probes per stream
    pub max_path_probes: u32,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Base recording directory, `~` allowed
    pub base_dir: String,
    /// File suffix including the dot, e.g. ".mp4"
    pub suffix: String,
}

#[derive(Debug, Deserialize)]
pub struct StreamsConfig {
    pub urls: Vec<String>,
    /// Streamer names, parallel to `urls`; used for folder and file naming
    pub streamers: Vec<String>,
    /// Target durations in `H:MM:SS` form; one entry broadcast to all
    /// streams, or exactly one per stream
    pub durations: Vec<String>,
}

/// One validated (stream, duration) pair ready for path planning.
#[derive(Debug, Clone)]
pub struct StreamEntry {
    pub streamer_id: String,
    pub source_url: String,
    /// Raw duration string handed to ffmpeg's `-t` flag
    pub duration_text: String,
    /// The same duration as total seconds, for progress tracking
    pub total_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.streams.urls.is_empty() {
            bail!("No stream URLs configured");
        }
        if self.streams.streamers.len() != self.streams.urls.len() {
            bail!(
                "{} streamer name(s) configured for {} stream URL(s)",
                self.streams.streamers.len(),
                self.streams.urls.len()
            );
        }
        let durations = self.streams.durations.len();
        if durations != 1 && durations != self.streams.urls.len() {
            bail!(
                "Duration list must have one shared entry or one per stream, got {}",
                durations
            );
        }
        for duration in &self.streams.durations {
            parse_clock_duration(duration)
                .with_context(|| format!("Invalid duration {duration:?}"))?;
        }
        if self.recorder.max_path_probes == 0 {
            bail!("max_path_probes must be at least 1");
        }
        Ok(())
    }

    /// Output directory with `~` expanded.
    pub fn base_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output.base_dir).as_ref())
    }

    /// The configured streams with durations broadcast and preparsed.
    pub fn stream_entries(&self) -> Result<Vec<StreamEntry>> {
        let mut entries = Vec::with_capacity(self.streams.urls.len());
        for (i, url) in self.streams.urls.iter().enumerate() {
            let duration_text = if self.streams.durations.len() == 1 {
                self.streams.durations[0].clone()
            } else {
                self.streams.durations[i].clone()
            };
            let total_secs = parse_clock_duration(&duration_text)?;
            entries.push(StreamEntry {
                streamer_id: self.streams.streamers[i].clone(),
                source_url: url.clone(),
                duration_text,
                total_secs,
            });
        }
        Ok(entries)
    }
}
