//! Category CLI commands

use clap::Subcommand;

use crate::display::category::{format_category_list, format_name_list};
use crate::error::HousingResult;
use crate::models::category::normalize_name;
use crate::state::ExpenseStore;
use crate::storage::StateStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with how many expenses use each
    List,

    /// Add a category
    Add {
        /// Category name (surrounding whitespace is trimmed)
        name: String,
    },

    /// List only the categories expenses actually use
    Used,
}

/// Handle a category command
pub fn handle_category_command<S: StateStore>(
    store: &mut ExpenseStore<S>,
    cmd: CategoryCommands,
) -> HousingResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories(), store.expenses()));
        }

        CategoryCommands::Add { name } => match normalize_name(&name) {
            Some(name) => {
                store.add_category(name.clone())?;
                println!("Added category: {}", name);
            }
            None => {
                tracing::debug!("Ignoring empty category name");
                println!("Category name is empty; nothing added.");
            }
        },

        CategoryCommands::Used => {
            print!("{}", format_name_list(&store.used_categories()));
        }
    }

    Ok(())
}
