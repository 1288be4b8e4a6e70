//! Storage layer
//!
//! The whole application state is one JSON document kept under a fixed key.
//! [`StateStore`] is the adapter contract; [`JsonFileStore`] keeps the
//! document on disk and [`MemoryStore`] keeps it in a string slot.
//! Attachment bytes live separately in the content-addressed [`BlobStore`].

pub mod blobs;
pub mod file_io;
pub mod json_store;
pub mod memory;

pub use blobs::{BlobStore, PruneReport};
pub use file_io::{read_json_required, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::HousingResult;
use crate::models::AppState;

/// Persistence contract for the application state document
pub trait StateStore {
    /// Read the stored state
    ///
    /// Returns `Ok(None)` when nothing is stored or when the stored document
    /// cannot be parsed. Parse failures are logged, never returned. An error
    /// means the backend itself could not be read, so nothing may be written
    /// over it.
    fn load(&self) -> HousingResult<Option<AppState>>;

    /// Replace the stored document with `state`
    fn save(&self, state: &AppState) -> HousingResult<()>;
}

/// Parse a stored document, logging and discarding it if malformed
///
/// Bytes that are not valid UTF-8 count as malformed.
pub(crate) fn decode_state(raw: &[u8], source: &str) -> Option<AppState> {
    match serde_json::from_slice::<AppState>(raw) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::error!(source, error = %e, "Error loading saved data; using defaults");
            None
        }
    }
}

/// Serialize a state document
pub(crate) fn encode_state(state: &AppState) -> HousingResult<String> {
    Ok(serde_json::to_string(state)?)
}
