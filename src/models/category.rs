//! Expense categories offered by the interactive prompt
//!
//! The ledger itself stores categories as free text; this list only drives the
//! numbered menu shown when adding an expense.

use std::fmt;

/// The fixed set of categories presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    Food,
    HomeUtilities,
    Transportation,
    HealthPersonalCare,
    ShoppingEntertainment,
    Work,
    Travel,
    Charity,
    Education,
    Misc,
}

impl ExpenseCategory {
    /// All categories in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::HomeUtilities,
            Self::Transportation,
            Self::HealthPersonalCare,
            Self::ShoppingEntertainment,
            Self::Work,
            Self::Travel,
            Self::Charity,
            Self::Education,
            Self::Misc,
        ]
    }

    /// Label written to the ledger
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::HomeUtilities => "Home & Utilities",
            Self::Transportation => "Transportation",
            Self::HealthPersonalCare => "Health & Personal Care",
            Self::ShoppingEntertainment => "Shopping and Entertainment",
            Self::Work => "Work",
            Self::Travel => "Travel",
            Self::Charity => "Charity",
            Self::Education => "Education",
            Self::Misc => "Misc",
        }
    }

    /// Look up a category by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::all().get(index))
            .copied()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
