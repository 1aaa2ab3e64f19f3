//! Best-score persistence, one value per game mode.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::quiz_engine::{error::StoreError, models::GameMode};

pub trait ScoreStore: Send + Sync {
    /// Best score recorded for `mode`; zero when nothing was stored yet.
    fn best_score(&self, mode: GameMode) -> Result<u32, StoreError>;
    fn set_best_score(&self, mode: GameMode, score: u32) -> Result<(), StoreError>;
}

/// Store `score` if it beats the stored best. Returns whether it did.
pub fn record_best<S: ScoreStore + ?Sized>(
    store: &S,
    mode: GameMode,
    score: u32,
) -> Result<bool, StoreError> {
    let previous = store.best_score(mode)?;
    if score > previous {
        store.set_best_score(mode, score)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    scores: Mutex<HashMap<GameMode, u32>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best_score(&self, mode: GameMode) -> Result<u32, StoreError> {
        let guard = self.scores.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.get(&mode).copied().unwrap_or(0))
    }

    fn set_best_score(&self, mode: GameMode, score: u32) -> Result<(), StoreError> {
        let mut guard = self.scores.lock().map_err(|_| StoreError::Poisoned)?;
        guard.insert(mode, score);
        Ok(())
    }
}

/// JSON object on disk keyed by [`GameMode::storage_key`].
///
/// Writes go to a sibling `*.tmp` file that is then renamed over the store, so
/// an interrupted write never leaves a torn file behind. A file that still
/// fails to parse is treated as empty and replaced by the next write.
#[derive(Debug)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileScoreStore { path: path.into(), lock: Mutex::new(()) }
    }

    fn read_all(&self) -> Result<HashMap<String, u32>, StoreError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&raw) {
            Ok(all) => Ok(all),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable score file, starting empty");
                Ok(HashMap::new())
            }
        }
    }

    fn write_all(&self, all: &HashMap<String, u32>) -> Result<(), StoreError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, serde_json::to_vec_pretty(all)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn best_score(&self, mode: GameMode) -> Result<u32, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read_all()?.get(&mode.storage_key()).copied().unwrap_or(0))
    }

    fn set_best_score(&self, mode: GameMode, score: u32) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut all = self.read_all()?;
        all.insert(mode.storage_key(), score);
        self.write_all(&all)
    }
}
