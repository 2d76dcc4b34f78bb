use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScoreError;

const APP_DIR_NAME: &str = "arcade-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Best-effort high score persistence.
///
/// Neither method reports failure: a store that cannot read yields 0 and a
/// store that cannot write keeps the score in memory only.
pub trait HighScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the high score stored at `path`.
///
/// Returns `Ok(0)` when the file does not exist yet (first run).
pub fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(source) => {
            return Err(ScoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|source| ScoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `score` to `path`, creating parent directories when needed.
pub fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    let io_error = |source: io::Error| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload).map_err(|source| ScoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}

/// High score kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default per-user data location.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonScoreFile {
    fn load(&mut self) -> u32 {
        match load_high_score_from_path(&self.path) {
            Ok(score) => score,
            Err(error) => {
                warn!(%error, "ignoring unreadable high score");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match save_high_score_to_path(&self.path, score) {
            Ok(()) => debug!(score, path = %self.path.display(), "high score saved"),
            Err(error) => warn!(%error, "failed to save high score"),
        }
    }
}

/// High score kept only for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScores {
    high_score: u32,
    saves: usize,
}

impl MemoryScores {
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Number of `save` calls received.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryScores {
    fn load(&mut self) -> u32 {
        self.high_score
    }

    fn save(&mut self, score: u32) {
        self.high_score = score;
        self.saves += 1;
    }
}
