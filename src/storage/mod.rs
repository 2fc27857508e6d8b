//! Storage layer for the expense tracker
//!
//! Provides the CSV ledger repository with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod ledger;

pub use file_io::write_atomic;
pub use ledger::{consolidate, upsert, LedgerRepository, LEDGER_HEADERS};
