//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{HousingError, HousingResult};
use crate::export::json::FullExport;
use crate::models::AppState;

/// Export the full state to YAML format
pub fn export_full_yaml<W: Write>(state: &AppState, writer: &mut W) -> HousingResult<()> {
    let export = FullExport::from_state(state);

    let header = format!(
        "# Housing Allowance Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| HousingError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| HousingError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let mut state = AppState {
            annual_allowance: Money::from_dollars(15000),
            ..AppState::default()
        };
        state.expenses.push(
            ExpenseDraft::new(
                "Lawn service",
                Money::from_cents(45_50),
                "Lawn Care",
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            )
            .into_expense(ExpenseId::new()),
        );

        let mut buffer = Vec::new();
        export_full_yaml(&state, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Housing Allowance Export"));
        assert!(yaml.contains("annualAllowance: 15000"));
        assert!(yaml.contains("description: Lawn service"));
        assert!(yaml.contains("amount: 45.5"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["summary"]["expenseCount"].as_u64(), Some(1));
    }
}
