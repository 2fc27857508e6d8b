//! Config CLI command
//!
//! Shows where data lives and updates the persisted settings.

use std::path::Path;

use clap::Args;
use tracing::info;

use super::parse_money;
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;

/// Arguments for the config command; with no flags it only prints
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the monthly budget (e.g. "2500")
    #[arg(short, long, value_parser = parse_money)]
    pub budget: Option<Money>,

    /// Set the currency symbol used in reports
    #[arg(long)]
    pub currency: Option<String>,
}

/// Apply any requested changes, then print paths and settings
pub fn handle_config_command(
    paths: &ExpensePaths,
    ledger_path: &Path,
    mut settings: Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if apply_config_changes(&mut settings, args)? {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "settings saved");
        println!("Settings updated.");
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Ledger file:    {}", ledger_path.display());
    println!();
    println!("Settings:");
    println!(
        "  Monthly budget:  {}",
        settings.monthly_budget.format_grouped(&settings.currency_symbol)
    );
    println!("  Currency symbol: {}", settings.currency_symbol);

    Ok(())
}

/// Returns whether anything changed
fn apply_config_changes(settings: &mut Settings, args: ConfigArgs) -> ExpenseResult<bool> {
    let mut changed = false;

    if let Some(budget) = args.budget {
        if budget.is_negative() {
            return Err(ExpenseError::Validation(
                "Monthly budget cannot be negative".into(),
            ));
        }
        settings.monthly_budget = budget;
        changed = true;
    }

    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
        changed = true;
    }

    Ok(changed)
}
