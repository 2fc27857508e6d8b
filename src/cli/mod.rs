//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger and reports.

pub mod config;
pub mod expense;
pub mod prompt;

pub use config::{handle_config_command, ConfigArgs};
pub use expense::{
    handle_add_command, handle_export_command, handle_list_command, handle_summary_command,
    AddArgs, ExportArgs,
};
pub use prompt::{ExpenseInput, Prompter};

use crate::models::Money;

/// clap value parser for money arguments
pub(crate) fn parse_money(value: &str) -> Result<Money, String> {
    Money::parse(value).map_err(|e| e.to_string())
}
