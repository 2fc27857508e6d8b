//! CSV Export functionality
//!
//! Writes the ledger in the same layout as the ledger file itself, so an
//! export can be dropped in as a replacement ledger.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;
use crate::storage::ledger::write_records;

/// Export the ledger rows to CSV
pub fn export_ledger_csv<W: Write>(export: &LedgerExport, writer: &mut W) -> ExpenseResult<()> {
    write_records(writer, &export.expenses).map_err(|e| match e {
        ExpenseError::Io(msg) | ExpenseError::Storage(msg) => ExpenseError::Export(msg),
        other => other,
    })
}
