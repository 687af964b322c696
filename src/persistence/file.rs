//! JSON file store for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BestRecord, BestScoreStore, StoreError};

/// Stores `{"best": n}` in a file. Saves go through a temp file and a rename
/// so a crash mid-write never leaves a truncated record.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BestScoreStore for FileStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(BestRecord::from_json(&json)?.best),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, BestRecord { best }.to_json()?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Best score {best} written to {}", self.path.display());
        Ok(())
    }
}
