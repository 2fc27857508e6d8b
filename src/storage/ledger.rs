//! Ledger repository for CSV storage
//!
//! The ledger is a flat CSV file with one row per expense. Every save rewrites
//! the whole file, and at most one row exists per (name, category) key.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money, TIMESTAMP_FORMAT};

use super::file_io::write_atomic;

/// Header row of the ledger file
pub const LEDGER_HEADERS: [&str; 4] = ["Expense name", "Amount in $", "Category", "Date of Creation"];

/// Repository for the CSV-backed ledger
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository for the ledger at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from disk
    ///
    /// A missing file is an empty ledger. A malformed row aborts the whole
    /// load with [`ExpenseError::Parse`].
    pub fn load(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let records = read_records(file)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded ledger");
        Ok(records)
    }

    /// Overwrite the ledger with `records`, in order
    pub fn save(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        write_atomic(&self.path, |writer| write_records(writer, records))?;
        debug!(path = %self.path.display(), count = records.len(), "saved ledger");
        Ok(())
    }

    /// Run one load -> upsert -> save cycle and return the stored ledger
    pub fn record(&self, incoming: ExpenseRecord) -> ExpenseResult<Vec<ExpenseRecord>> {
        let existing = self.load()?;
        info!(
            name = incoming.name(),
            category = incoming.category(),
            amount = %incoming.amount(),
            "recording expense"
        );
        let updated = upsert(existing, incoming)?;
        self.save(&updated)?;
        Ok(updated)
    }
}

/// Insert `incoming`, or merge it into the first record with the same key
///
/// The merged record keeps the position of the record it replaces.
pub fn upsert(
    mut existing: Vec<ExpenseRecord>,
    incoming: ExpenseRecord,
) -> ExpenseResult<Vec<ExpenseRecord>> {
    match existing.iter().position(|record| record.same_key(&incoming)) {
        Some(index) => {
            let merged = existing[index].add(&incoming)?;
            debug!(
                name = merged.name(),
                category = merged.category(),
                amount = %merged.amount(),
                "merged into existing expense"
            );
            existing[index] = merged;
        }
        None => existing.push(incoming),
    }
    Ok(existing)
}

/// Collapse records sharing an identity key, in first-seen order
///
/// Intended for display only; totals are computed over the raw records.
pub fn consolidate(records: &[ExpenseRecord]) -> ExpenseResult<Vec<ExpenseRecord>> {
    records
        .iter()
        .cloned()
        .try_fold(Vec::with_capacity(records.len()), upsert)
}

/// Parse ledger rows (header first) from any reader
pub fn read_records<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(parse_row(&row)?);
    }
    Ok(records)
}

/// Write the header and one row per record to any writer
pub fn write_records<W: Write>(writer: W, records: &[ExpenseRecord]) -> ExpenseResult<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(LEDGER_HEADERS)?;

    for record in records {
        csv_writer.write_record([
            record.name().to_string(),
            record.amount().to_plain_string(),
            record.category().to_string(),
            record.created_at_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn parse_row(row: &StringRecord) -> ExpenseResult<ExpenseRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    if row.len() != LEDGER_HEADERS.len() {
        return Err(ExpenseError::parse(
            line,
            format!("expected {} fields, found {}", LEDGER_HEADERS.len(), row.len()),
        ));
    }

    let name = &row[0];
    let amount = Money::parse(&row[1]).map_err(|e| ExpenseError::parse(line, e.to_string()))?;
    let category = &row[2];
    let created_at = parse_timestamp(&row[3])
        .map_err(|e| ExpenseError::parse(line, format!("invalid timestamp '{}': {}", &row[3], e)))?;

    Ok(ExpenseRecord::with_created_at(name, category, amount, created_at))
}

/// Parse a stored timestamp; the fractional seconds are optional on read
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S%.f"))
}
