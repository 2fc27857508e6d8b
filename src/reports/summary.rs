//! Spending summary
//!
//! Aggregates the ledger by category and compares the total against the
//! monthly budget, suggesting a daily allowance for the rest of the month.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Money};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

/// Where spending stands against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Money is left; `daily_allowance` spreads it over the rest of the month
    UnderBudget {
        remaining: Money,
        daily_allowance: Money,
    },
    /// Spending exceeds the budget by `overspent`
    OverBudget { overspent: Money },
}

/// Spending summary for a ledger
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    /// Report date
    pub as_of: NaiveDate,
    /// Per-category totals in first-seen order
    pub categories: Vec<CategoryTotal>,
    /// Sum of every record
    pub total_spent: Money,
    /// Monthly budget the total is compared against
    pub budget: Money,
    pub status: BudgetStatus,
}

impl SpendingSummary {
    /// Build a summary from the raw ledger records
    pub fn generate(
        records: &[ExpenseRecord],
        budget: Money,
        as_of: NaiveDate,
    ) -> ExpenseResult<Self> {
        let total_spent = total(records)?;
        let remaining = remaining_budget(total_spent, budget)?;

        let status = match daily_allowance(remaining, as_of) {
            Some(daily_allowance) => BudgetStatus::UnderBudget {
                remaining,
                daily_allowance,
            },
            None => BudgetStatus::OverBudget {
                overspent: remaining
                    .checked_neg()
                    .ok_or_else(|| overflow("amount over budget"))?,
            },
        };

        Ok(Self {
            as_of,
            categories: by_category(records)?,
            total_spent,
            budget,
            status,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expenses By Category:\n");
        if self.categories.is_empty() {
            output.push_str("  (no expenses recorded)\n");
        }
        for entry in &self.categories {
            output.push_str(&format!(
                "  {}: {}\n",
                entry.category,
                entry.amount.format_grouped(symbol)
            ));
        }

        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total_spent.format_grouped(symbol)
        ));

        match self.status {
            BudgetStatus::UnderBudget {
                remaining,
                daily_allowance,
            } => {
                output.push_str(&format!(
                    "Budget Remaining: {}\n",
                    remaining.format_grouped(symbol)
                ));
                let days_left = match days_remaining_in_month(self.as_of) {
                    0 => "last day of the month".to_string(),
                    1 => "1 day left in month".to_string(),
                    days => format!("{} days left in month", days),
                };
                output.push_str(&format!(
                    "Budget Per Day: {} ({})\n",
                    daily_allowance.format_grouped(symbol),
                    days_left
                ));
            }
            BudgetStatus::OverBudget { overspent } => {
                output.push_str(&format!(
                    "Over budget by {}: you've run out of money this month\n",
                    overspent.format_grouped(symbol)
                ));
            }
        }

        output
    }
}

/// Sum amounts per category, keeping first-seen category order
///
/// Duplicate identity keys are summed like any other row.
pub fn by_category(records: &[ExpenseRecord]) -> ExpenseResult<Vec<CategoryTotal>> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.category == record.category()) {
            Some(entry) => {
                entry.amount = entry
                    .amount
                    .checked_add(record.amount())
                    .ok_or_else(|| overflow(&format!("category '{}'", entry.category)))?;
            }
            None => totals.push(CategoryTotal {
                category: record.category().to_string(),
                amount: record.amount(),
            }),
        }
    }

    Ok(totals)
}

/// Raw sum of every record's amount
pub fn total(records: &[ExpenseRecord]) -> ExpenseResult<Money> {
    records.iter().try_fold(Money::zero(), |sum, record| {
        sum.checked_add(record.amount())
            .ok_or_else(|| overflow("total spent"))
    })
}

/// Budget left after `total`; negative when over budget
pub fn remaining_budget(total: Money, budget: Money) -> ExpenseResult<Money> {
    budget
        .checked_sub(total)
        .ok_or_else(|| overflow("remaining budget"))
}

fn overflow(what: &str) -> ExpenseError {
    ExpenseError::Overflow(what.to_string())
}

/// Days left in `as_of`'s month, not counting `as_of` itself
pub fn days_remaining_in_month(as_of: NaiveDate) -> u32 {
    let last_day = as_of
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .map(|last| last.day())
        .unwrap_or_else(|| as_of.day());

    last_day - as_of.day()
}

/// Suggested spend per remaining day of the month
///
/// Returns `None` when `remaining` is negative. On the last day of the month
/// the whole remaining budget is available for that day.
pub fn daily_allowance(remaining: Money, as_of: NaiveDate) -> Option<Money> {
    if remaining.is_negative() {
        return None;
    }

    let days = i64::from(days_remaining_in_month(as_of).max(1));
    remaining.checked_div(days)
}
