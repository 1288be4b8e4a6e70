//! Export and import CLI commands

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{HousingError, HousingResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::read_state_document;
use crate::state::ExpenseStore;
use crate::storage::{file_io::write_bytes_atomic, StateStore};

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses to CSV
    Csv {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export everything to JSON (can be re-imported)
    Json {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export everything to YAML
    Yaml {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command<S: StateStore>(
    store: &ExpenseStore<S>,
    cmd: ExportCommands,
) -> HousingResult<()> {
    let mut buffer = Vec::new();

    let output = match cmd {
        ExportCommands::Csv { output } => {
            export_expenses_csv(store.expenses(), &mut buffer)?;
            output
        }
        ExportCommands::Json { output } => {
            export_full_json(store.state(), &mut buffer)?;
            output
        }
        ExportCommands::Yaml { output } => {
            export_full_yaml(store.state(), &mut buffer)?;
            output
        }
    };

    match output {
        Some(path) => {
            write_bytes_atomic(&path, &buffer)?;
            println!("Exported to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(&buffer)
                .map_err(|e| HousingError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Replace the current state with a state document or JSON export
pub fn handle_import<S: StateStore>(store: &mut ExpenseStore<S>, path: &Path) -> HousingResult<()> {
    let summary = read_state_document(path)?;
    let expense_count = summary.state.expenses.len();

    store.replace_state(summary.state)?;
    tracing::info!(path = %path.display(), expense_count, "Imported state");

    println!("Imported {} expense(s) from {}", expense_count, path.display());
    for name in &summary.added_categories {
        println!("  Added missing category: {}", name);
    }

    Ok(())
}
