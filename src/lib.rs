//! Expense Tracker - personal expense tracking from the terminal
//!
//! Records expenses to a flat CSV ledger, merging entries that share a name and
//! category, and summarizes spending against a monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, money and the category list
//! - `storage`: CSV ledger storage with atomic writes
//! - `reports`: Per-category and budget summary
//! - `display`: Terminal table formatting
//! - `export`: CSV, JSON and YAML ledger export
//! - `cli`: Interactive prompts and command handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{ExpenseRecord, Money};
//! use expense_tracker::storage::LedgerRepository;
//!
//! let ledger = LedgerRepository::new("expenses.csv");
//! ledger.record(ExpenseRecord::new("Coffee", "Food", Money::from_cents(350)))?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
