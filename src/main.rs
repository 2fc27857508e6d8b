use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_config_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ConfigArgs, ExportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::LedgerRepository;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "Records an expense to a CSV ledger, merging it with any existing \
                  entry of the same name and category, then prints spending by \
                  category and how much is left to spend per day this month."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_LEDGER")]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense and print the summary
    #[command(alias = "new")]
    Add(AddArgs),

    /// Print spending by category and the remaining budget
    Summary,

    /// List recorded expenses
    #[command(alias = "ls")]
    List,

    /// Export the ledger as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger = LedgerRepository::new(cli.file.unwrap_or_else(|| paths.ledger_file()));

    match cli.command {
        None => handle_add_command(&ledger, &settings, AddArgs::default())?,
        Some(Commands::Add(args)) => handle_add_command(&ledger, &settings, args)?,
        Some(Commands::Summary) => handle_summary_command(&ledger, &settings)?,
        Some(Commands::List) => handle_list_command(&ledger, &settings)?,
        Some(Commands::Export(args)) => handle_export_command(&ledger, &settings, args)?,
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, ledger.path(), settings, args)?
        }
    }

    Ok(())
}
