//! CSV Export functionality
//!
//! One row per expense, for spreadsheets and tax preparers.

use std::io::Write;

use crate::error::{HousingError, HousingResult};
use crate::models::Expense;

/// Column headers of the expense CSV
pub const EXPENSE_CSV_HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Description",
    "Category",
    "Amount",
    "Notes",
    "Attachments",
];

/// Export expenses to CSV
///
/// Amounts are plain decimals without a currency symbol. Attachment names
/// are joined with "; ".
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> HousingResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPENSE_CSV_HEADER)
        .map_err(|e| HousingError::Export(e.to_string()))?;

    for expense in expenses {
        let attachments = expense
            .attachments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
                expense.category.clone(),
                format!("{:.2}", expense.amount.as_decimal()),
                expense.notes.clone().unwrap_or_default(),
                attachments,
            ])
            .map_err(|e| HousingError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| HousingError::Export(e.to_string()))?;

    Ok(())
}
