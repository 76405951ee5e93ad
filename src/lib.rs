pub mod config;
pub mod plan;
pub mod progress;
pub mod recorder;
pub mod runner;

pub use config::{Config, StreamEntry};
pub use plan::{resolve_output_path, PlanError};
pub use progress::{parse_clock_duration, parse_progress_marker, EtaEstimate};
pub use recorder::{RecordingRequest, RecordingSession, SessionOutcome, SessionReport};
pub use runner::run_batch;
