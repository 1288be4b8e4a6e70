use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use housing_allowance::cli::{
    handle_allowance_command, handle_attachment_command, handle_category_command,
    handle_dashboard, handle_expense_command, handle_export_command, handle_faq_command,
    handle_import, handle_report_command,
};
use housing_allowance::config::{HousingPaths, Settings};
use housing_allowance::logging::{init_logging, Verbosity};
use housing_allowance::state::ExpenseStore;
use housing_allowance::storage::{BlobStore, JsonFileStore};

#[derive(Parser)]
#[command(
    name = "housing",
    author = "Kaylee Beyene",
    version,
    about = "Track a minister's housing allowance and housing expenses",
    long_about = "Housing Allowance records the annual housing allowance designated \
                  by your church, the housing expenses you pay against it, and the \
                  receipts that back them up."
)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show allowance, spending and recent expenses
    #[command(alias = "summary")]
    Dashboard,

    /// Annual allowance commands
    #[command(subcommand)]
    Allowance(housing_allowance::cli::AllowanceCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(housing_allowance::cli::ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(housing_allowance::cli::CategoryCommands),

    /// Expense attachment commands
    #[command(subcommand)]
    Attachment(housing_allowance::cli::AttachmentCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(housing_allowance::cli::ReportCommands),

    /// Housing allowance questions and answers
    Faq {
        /// Question number to expand
        number: Option<usize>,
    },

    /// Export data
    #[command(subcommand)]
    Export(housing_allowance::cli::ExportCommands),

    /// Replace all data with a JSON state document or export
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Create the data directories and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    // Initialize paths and settings
    let paths = HousingPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let blobs = BlobStore::new(paths.attachments_dir());

    let open_store = || ExpenseStore::open(JsonFileStore::new(paths.state_file()));

    match cli.command {
        Some(Commands::Dashboard) | None => {
            handle_dashboard(&open_store()?, &settings)?;
        }
        Some(Commands::Allowance(cmd)) => {
            handle_allowance_command(&mut open_store()?, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut open_store()?, &blobs, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut open_store()?, cmd)?;
        }
        Some(Commands::Attachment(cmd)) => {
            handle_attachment_command(&mut open_store()?, &blobs, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&open_store()?, &settings, cmd)?;
        }
        Some(Commands::Faq { number }) => {
            handle_faq_command(number)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&open_store()?, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&mut open_store()?, &file)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Housing Allowance at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            let store = open_store()?;
            println!("Initialization complete!");
            println!();
            println!("Categories available for expenses:");
            for name in store.categories() {
                println!("  - {}", name);
            }
            println!();
            println!("Run 'housing allowance set <AMOUNT>' to record your designated allowance.");
        }
        Some(Commands::Config) => {
            println!("Housing Allowance Configuration");
            println!("===============================");
            println!("Base directory:        {}", paths.base_dir().display());
            println!("Settings file:         {}", paths.settings_file().display());
            println!("State file:            {}", paths.state_file().display());
            println!("Attachments directory: {}", paths.attachments_dir().display());
            println!("Initialized:           {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Recent expenses:    {}", settings.recent_count);
            println!("  Warning threshold:  {}%", settings.warning_threshold);
            println!("  Critical threshold: {}%", settings.critical_threshold);
        }
    }

    Ok(())
}
