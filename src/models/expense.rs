//! Expense record model
//!
//! An expense is identified by its (name, category) pair. Two records with the
//! same pair are "the same expense" regardless of amount or creation time, and
//! merging them sums their amounts.

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Canonical timestamp format shared by display and the ledger file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Approval state of an expense
///
/// The only legal transition is `Pending` -> `Approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved,
}

/// A single expense entry
///
/// Deliberately does not implement `PartialEq`: use [`ExpenseRecord::same_key`]
/// to compare identity keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    name: String,
    category: String,
    amount: Money,
    #[serde(default)]
    approval: ApprovalState,
    created_at: NaiveDateTime,
}

impl ExpenseRecord {
    /// Create a new, unapproved expense stamped with the current local time
    pub fn new(name: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        Self::with_created_at(name, category, amount, Local::now().naive_local())
    }

    /// Create an expense with an explicit creation time (e.g. read back from disk)
    pub fn with_created_at(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            approval: ApprovalState::Pending,
            created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn approval(&self) -> ApprovalState {
        self.approval
    }

    /// Whether both records share the same (name, category) identity key
    pub fn same_key(&self, other: &ExpenseRecord) -> bool {
        self.name == other.name && self.category == other.category
    }

    /// Merge two records with the same identity key
    ///
    /// The result carries the summed amount, a fresh creation time and a
    /// pending approval state. Neither operand is modified. Fails with
    /// [`ExpenseError::Overflow`] when the sum does not fit in an amount.
    pub fn add(&self, other: &ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        if !self.same_key(other) {
            return Err(ExpenseError::IncompatibleMerge {
                left: self.key_label(),
                right: other.key_label(),
            });
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| ExpenseError::Overflow(self.key_label()))?;

        Ok(ExpenseRecord::new(self.name.clone(), self.category.clone(), amount))
    }

    /// Mark the expense as approved (idempotent)
    pub fn approve(&mut self) {
        self.approval = ApprovalState::Approved;
    }

    pub fn is_approved(&self) -> bool {
        self.approval == ApprovalState::Approved
    }

    /// Whole days elapsed since creation, rounded down
    ///
    /// `as_of` defaults to the current local time. The result is negative when
    /// `as_of` precedes the creation time.
    pub fn days_since_creation(&self, as_of: Option<NaiveDateTime>) -> i64 {
        let as_of = as_of.unwrap_or_else(|| Local::now().naive_local());
        let elapsed = as_of - self.created_at;
        let days = elapsed.num_days();

        // num_days truncates toward zero
        if elapsed < Duration::zero() && elapsed != Duration::days(days) {
            days - 1
        } else {
            days
        }
    }

    /// Creation time in the canonical ledger format
    pub fn created_at_string(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    fn key_label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name,
            self.category,
            self.amount,
            self.created_at_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_new_expense_is_pending() {
        let expense = ExpenseRecord::new("Test Expense", "Test Category", Money::from_cents(10000));
        assert!(!expense.is_approved());
        assert_eq!(expense.approval(), ApprovalState::Pending);
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut expense = ExpenseRecord::new("Lunch", "Food", Money::from_cents(1200));
        expense.approve();
        assert!(expense.is_approved());
        expense.approve();
        assert!(expense.is_approved());
    }

    #[test]
    fn test_same_key_ignores_amount_and_time() {
        let a = ExpenseRecord::with_created_at("Coffee", "Food", Money::from_cents(300), at(2024, 1, 1, 8, 0, 0));
        let b = ExpenseRecord::with_created_at("Coffee", "Food", Money::from_cents(450), at(2024, 3, 9, 9, 0, 0));
        let c = ExpenseRecord::new("coffee", "Food", Money::from_cents(300));
        let d = ExpenseRecord::new("Coffee", "Travel", Money::from_cents(300));

        assert!(a.same_key(&b));
        assert!(!a.same_key(&c));
        assert!(!a.same_key(&d));
    }

    #[test]
    fn test_add_sums_amounts() {
        let a = ExpenseRecord::new("Expense 1", "Category", Money::from_cents(5000));
        let b = ExpenseRecord::new("Expense 1", "Category", Money::from_cents(3000));

        let merged = a.add(&b).unwrap();
        assert_eq!(merged.amount(), Money::from_cents(8000));
        assert_eq!(merged.name(), "Expense 1");
        assert_eq!(merged.category(), "Category");

        // operands untouched
        assert_eq!(a.amount(), Money::from_cents(5000));
        assert_eq!(b.amount(), Money::from_cents(3000));
    }

    #[test]
    fn test_add_resets_approval_and_timestamp() {
        let old = at(2020, 6, 1, 12, 0, 0);
        let mut a = ExpenseRecord::with_created_at("Rent", "Home", Money::from_cents(120000), old);
        a.approve();
        let b = ExpenseRecord::with_created_at("Rent", "Home", Money::from_cents(5000), old);

        let merged = a.add(&b).unwrap();
        assert!(!merged.is_approved());
        assert!(merged.created_at() > old);
    }

    #[test]
    fn test_add_rejects_different_keys() {
        let a = ExpenseRecord::new("Coffee", "Food", Money::from_cents(300));
        let b = ExpenseRecord::new("Taxi", "Food", Money::from_cents(1500));
        let c = ExpenseRecord::new("Coffee", "Travel", Money::from_cents(300));

        assert!(a.add(&b).unwrap_err().is_incompatible_merge());
        assert!(a.add(&c).unwrap_err().is_incompatible_merge());
    }

    #[test]
    fn test_add_rejects_overflowing_sum() {
        let a = ExpenseRecord::new("Rent", "Home", Money::from_cents(i64::MAX));
        let b = ExpenseRecord::new("Rent", "Home", Money::from_cents(1));

        let err = a.add(&b).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(err.to_string(), "Amount overflow: Rent (Home)");
        assert_eq!(a.amount(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_days_since_creation_truncates() {
        let expense = ExpenseRecord::with_created_at("Gym", "Health", Money::from_cents(4000), at(2024, 5, 1, 18, 0, 0));

        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 1, 23, 59, 59))), 0);
        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 2, 17, 59, 59))), 0);
        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 2, 18, 0, 0))), 1);
        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 11, 6, 0, 0))), 9);
    }

    #[test]
    fn test_days_since_creation_negative_floors() {
        let expense = ExpenseRecord::with_created_at("Gym", "Health", Money::from_cents(4000), at(2024, 5, 10, 12, 0, 0));

        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 10, 0, 0, 0))), -1);
        assert_eq!(expense.days_since_creation(Some(at(2024, 5, 8, 12, 0, 0))), -2);
    }

    #[test]
    fn test_days_since_creation_defaults_to_now() {
        let expense = ExpenseRecord::new("Snack", "Food", Money::from_cents(250));
        assert_eq!(expense.days_since_creation(None), 0);
    }

    #[test]
    fn test_display_format() {
        let created = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_micro_opt(14, 5, 9, 42)
            .unwrap();
        let expense = ExpenseRecord::with_created_at("Rent", "Home", Money::from_cents(120000), created);

        assert_eq!(
            expense.to_string(),
            "Rent, Home, $1200.00, 2024-02-29 14:05:09.000042"
        );
    }
}
