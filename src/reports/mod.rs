//! Reports module for the expense tracker
//!
//! Provides the per-category spending summary measured against the monthly
//! budget.

pub mod summary;

pub use summary::{
    by_category, daily_allowance, days_remaining_in_month, remaining_budget, total,
    BudgetStatus, CategoryTotal, SpendingSummary,
};
