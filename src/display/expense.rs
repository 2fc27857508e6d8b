//! Expense display formatting
//!
//! Formats ledger rows as a table for terminal output.

use crate::models::ExpenseRecord;

/// Format expenses as a table
pub fn format_expense_list(records: &[ExpenseRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n\nRun 'expense add' to record one.".to_string();
    }

    let amounts: Vec<String> = records
        .iter()
        .map(|r| r.amount().format_grouped(symbol))
        .collect();

    let name_width = records
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = records
        .iter()
        .map(|r| r.category().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let amount_width = amounts.iter().map(String::len).max().unwrap_or(6).max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<category_width$}  {:>amount_width$}  {}\n",
        "Name", "Category", "Amount", "Created",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<category_width$}  {:->amount_width$}  {:-<19}\n",
        "", "", "", "",
    ));

    for (record, amount) in records.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<name_width$}  {:<category_width$}  {:>amount_width$}  {}\n",
            record.name(),
            record.category(),
            amount,
            record.created_at().format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    output.push_str(&format!("\n{} expense(s)\n", records.len()));
    output
}
