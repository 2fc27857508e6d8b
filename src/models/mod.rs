//! Core data models for the expense tracker
//!
//! This module contains the expense record, the money type used for amounts,
//! and the category list offered by the interactive prompt.

pub mod category;
pub mod expense;
pub mod money;

pub use category::ExpenseCategory;
pub use expense::{ApprovalState, ExpenseRecord, TIMESTAMP_FORMAT};
pub use money::{Money, MoneyParseError};
