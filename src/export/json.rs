//! JSON Export functionality
//!
//! The export is the persisted state document with version information and
//! a summary added alongside, so an export can be read back by `import`.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{HousingError, HousingResult};
use crate::models::{category, AppState, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full state export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Allowance, expenses and categories in the persisted layout
    #[serde(flatten)]
    pub state: AppState,

    pub summary: ExportSummary,
}

/// Derived figures included for readers of the export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_expenses: Money,
    pub remaining_allowance: Money,
    pub expense_count: usize,
    pub category_count: usize,
    /// Categories with at least one expense
    pub used_categories: Vec<String>,
    pub earliest_expense: Option<NaiveDate>,
    pub latest_expense: Option<NaiveDate>,
}

impl FullExport {
    /// Build an export of `state`
    pub fn from_state(state: &AppState) -> Self {
        let summary = ExportSummary {
            total_expenses: state.total_expenses(),
            remaining_allowance: state.remaining_allowance(),
            expense_count: state.expenses.len(),
            category_count: state.categories.len(),
            used_categories: category::used_categories(&state.expenses),
            earliest_expense: state.expenses.iter().map(|e| e.date).min(),
            latest_expense: state.expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            state: state.clone(),
            summary,
        }
    }
}

/// Export the full state to pretty-printed JSON
pub fn export_full_json<W: Write>(state: &AppState, writer: &mut W) -> HousingResult<()> {
    let export = FullExport::from_state(state);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| HousingError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HousingError::Export(e.to_string()))?;

    Ok(())
}
