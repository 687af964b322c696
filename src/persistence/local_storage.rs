//! Browser LocalStorage store (wasm32 only)

use super::{BestRecord, BestScoreStore, StoreError};

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "flapgap_best";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("no LocalStorage".into()))
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(json)) => Ok(BestRecord::from_json(&json)?.best),
            Ok(None) => Ok(0),
            Err(_) => Err(StoreError::Unavailable(format!("cannot read {}", self.key))),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = BestRecord { best }.to_json()?;
        storage
            .set_item(&self.key, &json)
            .map_err(|_| StoreError::Unavailable(format!("cannot write {}", self.key)))?;
        log::info!("Best score saved ({best})");
        Ok(())
    }
}
