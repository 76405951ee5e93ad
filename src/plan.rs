//! Output path planning
//!
//! Resolves a non-colliding output path for each stream before its recording
//! session starts, and makes sure the containing directories exist. The file
//! itself is created later by ffmpeg.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to create directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no unused output path under {dir} after {probes} probes")]
    Exhausted { dir: PathBuf, probes: u32 },
}

/// Compute a non-colliding output path `base_dir/streamer_id/streamer_id<suffix>`.
///
/// If the base candidate already exists, probes `streamer_id_2<suffix>`,
/// `streamer_id_3<suffix>`, ... up to `max_probes` before giving up with
/// [`PlanError::Exhausted`]. The returned path never exists at call time.
pub fn resolve_output_path(
    base_dir: &Path,
    streamer_id: &str,
    suffix: &str,
    max_probes: u32,
) -> Result<PathBuf, PlanError> {
    let stream_dir = base_dir.join(streamer_id);
    for dir in [base_dir, stream_dir.as_path()] {
        fs::create_dir_all(dir).map_err(|source| PlanError::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let candidate = stream_dir.join(format!("{streamer_id}{suffix}"));
    if !candidate.exists() {
        return Ok(candidate);
    }

    for n in 2..=max_probes {
        let candidate = stream_dir.join(format!("{streamer_id}_{n}{suffix}"));
        if !candidate.exists() {
            debug!(
                "Base output path taken for {}, using {}",
                streamer_id,
                candidate.display()
            );
            return Ok(candidate);
        }
    }

    Err(PlanError::Exhausted {
        dir: stream_dir,
        probes: max_probes,
    })
}
