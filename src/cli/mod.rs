//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the state container.

pub mod allowance;
pub mod attachment;
pub mod category;
pub mod expense;
pub mod export;
pub mod faq;
pub mod report;

pub use allowance::{handle_allowance_command, AllowanceCommands};
pub use attachment::{handle_attachment_command, AttachmentCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import, ExportCommands};
pub use faq::handle_faq_command;
pub use report::{handle_dashboard, handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{HousingError, HousingResult};
use crate::models::{Expense, Money};
use crate::state::ExpenseStore;
use crate::storage::StateStore;

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(input: &str) -> HousingResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        HousingError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", input))
    })
}

/// Parse an expense amount; unlike the allowance, bad input is an error
pub(crate) fn parse_amount(input: &str) -> HousingResult<Money> {
    Money::parse(input).map_err(|e| HousingError::Validation(format!("Invalid amount: {}", e)))
}

/// Look up an expense by full or short ID
pub(crate) fn require_expense<'a, S: StateStore>(
    store: &'a ExpenseStore<S>,
    identifier: &str,
) -> HousingResult<&'a Expense> {
    store
        .find_expense(identifier)
        .ok_or_else(|| HousingError::expense_not_found(identifier))
}
