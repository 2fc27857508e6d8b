//! YAML Export functionality
//!
//! Exports the ledger to YAML format for a human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(export: &LedgerExport, writer: &mut W) -> ExpenseResult<()> {
    let to_export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense ledger export").map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};

    #[test]
    fn test_export_ledger_yaml() {
        let expenses = vec![ExpenseRecord::new("Taxi", "Travel", Money::from_cents(1850))];
        let export = LedgerExport::new(expenses, Money::from_cents(200000)).unwrap();

        let mut output = Vec::new();
        export_ledger_yaml(&export, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Expense ledger export"));
        assert!(yaml.contains("name: Taxi"));
        assert!(yaml.contains("amount: 1850"));

        let parsed: LedgerExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.expenses[0].category(), "Travel");
    }
}
