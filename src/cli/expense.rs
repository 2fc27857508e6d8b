//! Expense CLI commands
//!
//! Implements adding an expense, listing the ledger, printing the budget
//! summary and exporting the ledger.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::info;

use super::parse_money;
use super::prompt::{ExpenseInput, Prompter};
use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::ExpenseResult;
use crate::export::{export_ledger, ExportFormat, LedgerExport};
use crate::models::Money;
use crate::reports::SpendingSummary;
use crate::storage::{consolidate, write_atomic, LedgerRepository};

/// Arguments for adding an expense; anything omitted is prompted for
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Expense name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Amount (e.g. "12.50")
    #[arg(short, long, value_parser = parse_money, allow_hyphen_values = true)]
    pub amount: Option<Money>,

    /// Category menu number (1-10) or any category name
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for exporting the ledger
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Collect one expense, record it, then print the summary
pub fn handle_add_command(
    ledger: &LedgerRepository,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    println!("Running Expense Tracker!");

    let preset = ExpenseInput {
        name: args.name,
        amount: args.amount,
        category: args.category,
    };
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut expense = prompter.collect_expense(preset)?;

    println!("Expense created at: {}", expense.created_at_string());

    expense.approve();
    if expense.is_approved() {
        println!("Expense is approved!");
    } else {
        println!("Expense is not approved yet.");
    }
    println!("Days since creation: {}", expense.days_since_creation(None));

    println!("Saving expense: {} to {}", expense, ledger.path().display());
    ledger.record(expense)?;

    println!();
    handle_summary_command(ledger, settings)
}

/// Print the spending summary for the stored ledger
pub fn handle_summary_command(ledger: &LedgerRepository, settings: &Settings) -> ExpenseResult<()> {
    let records = ledger.load()?;
    let summary = SpendingSummary::generate(
        &records,
        settings.monthly_budget,
        Local::now().date_naive(),
    )?;

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the ledger, one row per identity key
pub fn handle_list_command(ledger: &LedgerRepository, settings: &Settings) -> ExpenseResult<()> {
    let records = consolidate(&ledger.load()?)?;
    println!("{}", format_expense_list(&records, &settings.currency_symbol));
    Ok(())
}

/// Export the ledger to stdout or a file
pub fn handle_export_command(
    ledger: &LedgerRepository,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let export = LedgerExport::new(ledger.load()?, settings.monthly_budget)?;

    match args.output {
        Some(path) => {
            write_atomic(&path, |writer| export_ledger(&export, args.format, writer))?;
            info!(path = %path.display(), format = ?args.format, "exported ledger");
            println!(
                "Exported {} expense(s) to {}",
                export.metadata.expense_count,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_ledger(&export, args.format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
