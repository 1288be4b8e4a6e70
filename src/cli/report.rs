//! Dashboard and report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::HousingResult;
use crate::reports::{AllowanceSummary, CategoryBreakdown};
use crate::state::ExpenseStore;
use crate::storage::StateStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending per category with each category's share
    Categories,
}

/// Print the allowance dashboard
pub fn handle_dashboard<S: StateStore>(store: &ExpenseStore<S>, settings: &Settings) -> HousingResult<()> {
    let summary = AllowanceSummary::generate(store.state(), settings);
    print!("{}", summary.format_terminal(settings));
    Ok(())
}

/// Handle a report command
pub fn handle_report_command<S: StateStore>(
    store: &ExpenseStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> HousingResult<()> {
    match cmd {
        ReportCommands::Categories => {
            let report = CategoryBreakdown::generate(store.state());
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
    }
    Ok(())
}
