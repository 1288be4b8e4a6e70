//! Expense CLI commands

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{HousingError, HousingResult};
use crate::models::{self, ExpenseDraft, Money};
use crate::services::ExpenseFilter;
use crate::state::ExpenseStore;
use crate::storage::{BlobStore, StateStore};

use super::{parse_amount, parse_date, require_expense};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "1200" or "1,200.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Files to attach (receipts, invoices)
        #[arg(short, long = "attach")]
        attach: Vec<PathBuf>,
    },

    /// List expenses
    List {
        /// Match description or category (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category (exact name)
        #[arg(short, long)]
        category: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID (full or short, e.g. exp-1a2b3c4d)
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        /// Remove the notes
        #[arg(long)]
        clear_notes: bool,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: StateStore>(
    store: &mut ExpenseStore<S>,
    blobs: &BlobStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> HousingResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
            notes,
            attach,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let mut draft = ExpenseDraft::new(description, parse_amount(&amount)?, category, date);
            if let Some(notes) = notes {
                draft = draft.with_notes(notes);
            }
            // Validate before copying files into the blob store
            draft
                .validate()
                .map_err(|e| HousingError::Validation(e.to_string()))?;
            if !models::category::contains(store.categories(), &draft.category) {
                return Err(HousingError::category_not_found(&draft.category));
            }
            for path in &attach {
                draft = draft.with_attachment(blobs.attach_file(path)?);
            }

            let expense = store.add_expense(draft)?;
            println!("Added expense: {}", expense.description);
            println!(
                "  Amount: {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", expense.id);
            if expense.has_attachments() {
                println!("  Attachments: {}", expense.attachments.len());
            }
        }

        ExpenseCommands::List {
            search,
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(term) = search {
                filter = filter.search(term);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(from) = from {
                filter = filter.from(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to(parse_date(&to)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = filter.apply(store.expenses());
            print!("{}", format_expense_table(&expenses, settings));

            let total = expenses.iter().map(|e| e.amount).sum::<Money>();
            println!(
                "{} expense(s), total {}",
                expenses.len(),
                total.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = require_expense(store, &id)?;
            print!("{}", format_expense_details(expense, blobs, settings));
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
            notes,
            clear_notes,
        } => {
            if description.is_none()
                && amount.is_none()
                && category.is_none()
                && date.is_none()
                && notes.is_none()
                && !clear_notes
            {
                println!("No changes specified. Use --description, --amount, --category, --date, --notes or --clear-notes.");
                return Ok(());
            }

            let mut expense = require_expense(store, &id)?.clone();
            if let Some(description) = description {
                expense.description = description;
            }
            if let Some(amount) = amount {
                expense.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                expense.category = category;
            }
            if let Some(date) = date {
                expense.date = parse_date(&date)?;
            }
            if let Some(notes) = notes {
                expense.notes = Some(notes);
            }
            if clear_notes {
                expense.notes = None;
            }

            store.update_expense(expense.clone())?;
            println!("Updated expense: {}", expense.description);
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = require_expense(store, &id)?.clone();

            if !force {
                let stdin = io::stdin();
                let prompt = format!("Delete '{}' ({})?", expense.description, expense.id);
                if !confirm(&prompt, &mut stdin.lock(), &mut io::stdout())? {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            store.delete_expense(expense.id)?;
            println!("Deleted expense: {}", expense.description);
            if expense.has_attachments() {
                println!("Run `housing attachment prune` to free unreferenced attachment files.");
            }
        }
    }

    Ok(())
}

/// Ask a yes/no question; anything but "y" or "yes" is a no
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> HousingResult<bool> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
