//! Allowance CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::HousingResult;
use crate::models::Money;
use crate::state::ExpenseStore;
use crate::storage::StateStore;

/// Allowance subcommands
#[derive(Subcommand)]
pub enum AllowanceCommands {
    /// Show the annual allowance and what is left of it
    Show,

    /// Set the annual allowance (e.g., "30000" or "$30,000.00")
    Set {
        /// Amount; anything unparseable is stored as 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle an allowance command
pub fn handle_allowance_command<S: StateStore>(
    store: &mut ExpenseStore<S>,
    settings: &Settings,
    cmd: AllowanceCommands,
) -> HousingResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AllowanceCommands::Show => {
            println!(
                "Annual allowance: {}",
                store.annual_allowance().format_with_symbol(symbol)
            );
            println!(
                "Remaining:        {}",
                store.remaining_allowance().format_with_symbol(symbol)
            );
        }

        AllowanceCommands::Set { amount } => {
            let parsed = parse_allowance(&amount);
            store.set_annual_allowance(parsed)?;
            println!("Annual allowance set to {}", parsed.format_with_symbol(symbol));
        }
    }

    Ok(())
}

/// Parse an allowance, treating invalid input as zero
fn parse_allowance(input: &str) -> Money {
    Money::parse(input).unwrap_or_else(|e| {
        tracing::warn!(input, error = %e, "Unparseable allowance, using 0");
        Money::zero()
    })
}
