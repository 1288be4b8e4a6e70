//! State document import
//!
//! Reads a document in the persisted layout (as written by the store or by
//! `export json`) so it can replace the current state. Unlike loading the
//! state file at startup, an import is explicit, so problems are reported
//! instead of silently falling back to defaults.

use std::path::Path;

use crate::error::{HousingError, HousingResult};
use crate::models::{category, AppState};
use crate::storage::read_json_required;

/// Result of checking an imported document
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub state: AppState,
    /// Categories used by expenses but missing from the category list
    pub added_categories: Vec<String>,
}

/// Read and check a state document
///
/// Every expense must pass field validation. Categories that expenses use
/// but the document doesn't list are appended so the result stays
/// consistent.
pub fn read_state_document(path: &Path) -> HousingResult<ImportSummary> {
    let mut state: AppState = read_json_required(path)?;

    for expense in &state.expenses {
        expense.validate().map_err(|e| {
            HousingError::Validation(format!("Expense {} ({}): {}", expense.id, expense.description, e))
        })?;
    }

    let mut added_categories = Vec::new();
    for used in category::used_categories(&state.expenses) {
        if !category::contains(&state.categories, &used) {
            state.categories.push(used.clone());
            added_categories.push(used);
        }
    }

    if !added_categories.is_empty() {
        tracing::warn!(
            count = added_categories.len(),
            "Imported expenses use unlisted categories"
        );
    }

    Ok(ImportSummary {
        state,
        added_categories,
    })
}
