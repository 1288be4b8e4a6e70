//! Expense display formatting
//!
//! The expense list is rendered as a table; a single expense gets a detail
//! view including its notes and attachments.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Attachment, Expense};
use crate::storage::BlobStore;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Files")]
    files: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: settings.format_date(expense.date),
            description: expense.description.clone(),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            files: if expense.has_attachments() {
                expense.attachments.len().to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[&Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format expense details, marking attachments whose content is missing
pub fn format_expense_details(expense: &Expense, blobs: &BlobStore, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", settings.format_date(expense.date)));

    if let Some(notes) = expense.notes_text() {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    if expense.has_attachments() {
        output.push_str(&format!("\nAttachments ({}):\n", expense.attachments.len()));
        for (i, attachment) in expense.attachments.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {}\n",
                i + 1,
                format_attachment(attachment, blobs.resolve(attachment).is_some())
            ));
        }
    }

    output
}

/// One-line attachment description
pub fn format_attachment(attachment: &Attachment, available: bool) -> String {
    let mut line = format!(
        "{} ({}, {})",
        attachment.name,
        attachment.mime_type,
        format_size(attachment.size)
    );
    if !available {
        line.push_str(" (unavailable)");
    }
    line
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
