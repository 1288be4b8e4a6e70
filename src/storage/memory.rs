//! In-memory state store
//!
//! Holds the serialized document in a string slot, the same shape as a
//! key/value local storage. Used by tests and by callers embedding the
//! tracker without a filesystem.

use std::sync::RwLock;

use crate::error::{HousingError, HousingResult};
use crate::models::AppState;

use super::{decode_state, encode_state, StateStore};

/// State store keeping the serialized document in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `raw` (which need not be valid JSON)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(raw.into())),
        }
    }

    /// The currently stored document
    pub fn raw(&self) -> HousingResult<Option<String>> {
        let slot = self
            .slot
            .read()
            .map_err(|e| HousingError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slot.clone())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> HousingResult<Option<AppState>> {
        Ok(self
            .raw()?
            .and_then(|raw| decode_state(raw.as_bytes(), "memory")))
    }

    fn save(&self, state: &AppState) -> HousingResult<()> {
        let encoded = encode_state(state)?;
        let mut slot = self
            .slot
            .write()
            .map_err(|e| HousingError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *slot = Some(encoded);
        Ok(())
    }
}
