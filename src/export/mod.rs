//! Export module for the expense tracker
//!
//! Provides ledger export in multiple formats:
//! - CSV: same layout as the ledger file (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::ExpenseResult;

pub use self::csv::export_ledger_csv;
pub use json::{export_ledger_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

/// Write `export` to `writer` in the requested format
pub fn export_ledger<W: Write>(
    export: &LedgerExport,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_ledger_csv(export, writer),
        ExportFormat::Json => export_ledger_json(export, writer),
        ExportFormat::Yaml => export_ledger_yaml(export, writer),
    }
}
