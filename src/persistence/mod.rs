//! Best-score persistence
//!
//! The game only ever stores one number. Stores are fallible, but nothing in
//! gameplay depends on them succeeding: `load_best_or_default` turns every
//! failure into 0 and the game logs and ignores save failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored best score is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// On-disk / in-storage record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best: u32,
}

impl BestRecord {
    pub fn to_json(self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Somewhere a best score can live between sessions
pub trait BestScoreStore {
    /// Stored best, or `Ok(0)` when nothing has been stored yet
    fn load_best(&self) -> Result<u32, StoreError>;

    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Load the best score, treating any failure as "no best yet"
pub fn load_best_or_default(store: &dyn BestScoreStore) -> u32 {
    match store.load_best() {
        Ok(best) => best,
        Err(e) => {
            log::warn!("Could not load best score, starting from 0: {e}");
            0
        }
    }
}

/// In-process store; optionally fails every call (for exercising error paths)
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub best: Option<u32>,
    pub saves: Vec<u32>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        Ok(self.best.unwrap_or(0))
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        self.best = Some(best);
        self.saves.push(best);
        Ok(())
    }
}
