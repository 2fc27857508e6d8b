//! JSON Export functionality
//!
//! Exports the ledger to JSON format with schema versioning.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money};
use crate::reports;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Monthly budget at export time
    pub monthly_budget: Money,

    /// Every ledger row, in file order
    pub expenses: Vec<ExpenseRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_spent: Money,
    pub earliest_expense: Option<NaiveDateTime>,
    pub latest_expense: Option<NaiveDateTime>,
}

impl LedgerExport {
    /// Build an export from the loaded ledger
    pub fn new(expenses: Vec<ExpenseRecord>, monthly_budget: Money) -> ExpenseResult<Self> {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_spent: reports::total(&expenses)?,
            earliest_expense: expenses.iter().map(ExpenseRecord::created_at).min(),
            latest_expense: expenses.iter().map(ExpenseRecord::created_at).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            monthly_budget,
            expenses,
            metadata,
        })
    }
}

/// Export the ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(export: &LedgerExport, writer: &mut W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_ledger_json() {
        let created = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        let expenses = vec![
            ExpenseRecord::with_created_at("Coffee", "Food", Money::from_cents(950), created),
            ExpenseRecord::with_created_at("Rent", "Home", Money::from_cents(125000), created),
        ];
        let export = LedgerExport::new(expenses, Money::from_cents(200000)).unwrap();

        let mut output = Vec::new();
        export_ledger_json(&export, &mut output).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.expenses.len(), 2);
        assert_eq!(parsed.expenses[1].name(), "Rent");
        assert_eq!(parsed.metadata.total_spent, Money::from_cents(125950));
        assert_eq!(parsed.metadata.earliest_expense, Some(created));
    }

    #[test]
    fn test_empty_export_metadata() {
        let export = LedgerExport::new(Vec::new(), Money::from_cents(200000)).unwrap();
        assert_eq!(export.metadata.expense_count, 0);
        assert_eq!(export.metadata.earliest_expense, None);
    }

    #[test]
    fn test_export_rejects_overflowing_total() {
        let expenses = vec![
            ExpenseRecord::new("Big", "Misc", Money::from_cents(i64::MAX)),
            ExpenseRecord::new("Small", "Misc", Money::from_cents(1)),
        ];
        let err = LedgerExport::new(expenses, Money::from_cents(200000)).unwrap_err();
        assert!(err.is_overflow());
    }
}
