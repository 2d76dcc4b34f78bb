use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected game settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small; it must be at least 4 cells wide and 1 tall")]
    GridTooSmall { width: u16, height: u16 },
    #[error("tick interval must be at least 1 ms")]
    ZeroInterval,
    #[error("minimum interval {min_ms} ms exceeds initial interval {initial_ms} ms")]
    IntervalRange { min_ms: u64, initial_ms: u64 },
    #[error("speed-up threshold must be a positive number of points")]
    ZeroSpeedUpPoints,
}

/// Failures reading or writing the high score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
