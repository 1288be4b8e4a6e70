//! Filesystem-backed state store
//!
//! Keeps the state document at a single path and rewrites it atomically on
//! every save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HousingError, HousingResult};
use crate::models::AppState;

use super::file_io::{read_if_exists, write_json_atomic};
use super::{decode_state, StateStore};

/// State store writing one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the document at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the state document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable document is moved before defaults replace it
    pub fn quarantine_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Move the document out of the way; defaults must never overwrite it
    fn quarantine(&self) -> HousingResult<()> {
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| {
            HousingError::Storage(format!(
                "Could not move unreadable {} aside: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::warn!(path = %target.display(), "Moved unreadable state document aside");
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> HousingResult<Option<AppState>> {
        let Some(raw) = read_if_exists(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "No saved state");
            return Ok(None);
        };

        let state = decode_state(&raw, &self.path.display().to_string());
        if state.is_none() {
            self.quarantine()?;
        }
        Ok(state)
    }

    fn save(&self, state: &AppState) -> HousingResult<()> {
        write_json_atomic(&self.path, state)?;
        tracing::trace!(path = %self.path.display(), "Saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attachment, ExpenseDraft, ExpenseId, Money};
    use crate::state::ExpenseStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data").join("state.json"));
        (temp_dir, store)
    }

    fn populated_state() -> AppState {
        let mut state = AppState {
            annual_allowance: Money::from_dollars(12000),
            ..AppState::default()
        };
        state.categories.push("Pest Control".into());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        state.expenses.push(
            ExpenseDraft::new("Rent", Money::from_cents(100_050), "Mortgage/Rent", date)
                .with_notes("January")
                .with_attachment(Attachment::from_blob(
                    "lease.pdf",
                    &"a".repeat(64),
                    "application/pdf",
                    1024,
                ))
                .into_expense(ExpenseId::new()),
        );
        state
    }

    #[test]
    fn test_load_missing_is_none() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let state = populated_state();

        store.save(&state).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_corrupt_document_is_quarantined() {
        crate::logging::init_test_logging();
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ this is not json").unwrap();

        assert!(store.load().unwrap().is_none());
        assert!(!store.path().exists());
        assert_eq!(
            fs::read_to_string(store.quarantine_path()).unwrap(),
            "{ this is not json"
        );
    }

    #[test]
    fn test_non_utf8_document_is_quarantined_not_overwritten() {
        crate::logging::init_test_logging();
        let (_temp_dir, store) = create_test_store();
        let original: &[u8] = b"{\"annualAllowance\": 12000, \"notes\": \"\xff\"}";
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), original).unwrap();

        let opened = ExpenseStore::open(store.clone()).unwrap();

        assert_eq!(opened.annual_allowance(), Money::zero());
        assert_eq!(fs::read(store.quarantine_path()).unwrap(), original);
        assert_eq!(store.load().unwrap(), Some(AppState::default()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_path_fails_open_without_writing() {
        let (_temp_dir, store) = create_test_store();
        // A directory where the document should be cannot be read as a file
        fs::create_dir_all(store.path()).unwrap();

        assert!(store.load().is_err());
        assert!(ExpenseStore::open(store.clone()).is_err());
        assert!(store.path().is_dir());
        assert!(!store.quarantine_path().exists());
    }

    #[test]
    fn test_reads_document_written_by_hand() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{
                "annualAllowance": 24000,
                "expenses": [{
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "description": "Electric",
                    "amount": 142.37,
                    "category": "Utilities",
                    "date": "2024-03-15",
                    "notes": "",
                    "attachments": []
                }],
                "categories": ["Utilities"]
            }"#,
        )
        .unwrap();

        let state = store.load().unwrap().unwrap();
        assert_eq!(state.annual_allowance, Money::from_dollars(24000));
        assert_eq!(state.expenses[0].amount.cents(), 14237);
        assert_eq!(state.categories, vec!["Utilities"]);
    }
}
