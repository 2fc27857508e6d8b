//! Interactive prompts for a new expense
//!
//! Asks for name, amount and category in that order, re-prompting on input
//! that cannot be used. Any value already supplied on the command line is not
//! asked for again.

use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseCategory, ExpenseRecord, Money};

/// Values supplied up front; `None` fields are prompted for
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

/// Line-oriented prompter over any input/output pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect a complete expense, prompting for whatever `preset` lacks
    pub fn collect_expense(&mut self, preset: ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        let name = match preset.name {
            Some(name) => validate_name(&name)?,
            None => self.expense_name()?,
        };
        let amount = match preset.amount {
            Some(amount) => amount,
            None => self.expense_amount()?,
        };
        let category = match preset.category {
            Some(category) => resolve_category(&category)?,
            None => self.expense_category()?.name().to_string(),
        };

        Ok(ExpenseRecord::new(name, category, amount))
    }

    /// Prompt until a non-empty name is entered
    pub fn expense_name(&mut self) -> ExpenseResult<String> {
        loop {
            let line = self.read_line("Enter expense name: ")?;
            match validate_name(&line) {
                Ok(name) => return Ok(name),
                Err(_) => self.say("Expense name cannot be empty.")?,
            }
        }
    }

    /// Prompt until a parseable amount is entered
    pub fn expense_amount(&mut self) -> ExpenseResult<Money> {
        loop {
            let line = self.read_line("Enter expense amount: ")?;
            match Money::parse(&line) {
                Ok(amount) => return Ok(amount),
                Err(e) => self.say(&format!("{}. Please enter a number like 12.50", e))?,
            }
        }
    }

    /// Show the category menu until a valid number is chosen
    pub fn expense_category(&mut self) -> ExpenseResult<ExpenseCategory> {
        let categories = ExpenseCategory::all();

        loop {
            self.say("Select a category:")?;
            for (index, category) in categories.iter().enumerate() {
                self.say(&format!("  {}. {}", index + 1, category))?;
            }

            let prompt = format!("Enter a category number [1-{}]: ", categories.len());
            let line = self.read_line(&prompt)?;
            let choice = line
                .parse::<usize>()
                .ok()
                .and_then(ExpenseCategory::from_menu_number);

            match choice {
                Some(category) => return Ok(category),
                None => self.say("Invalid category. Please try again!")?,
            }
        }
    }

    fn say(&mut self, message: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ExpenseError::Validation(
                "input ended before the expense was complete".into(),
            ));
        }
        Ok(line.trim().to_string())
    }
}

fn validate_name(name: &str) -> ExpenseResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExpenseError::Validation("Expense name cannot be empty".into()));
    }
    Ok(name.to_string())
}

/// Map a menu number to its label; any other text is used as-is
pub fn resolve_category(value: &str) -> ExpenseResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ExpenseError::Validation("Category cannot be empty".into()));
    }

    let from_menu = value
        .parse::<usize>()
        .ok()
        .and_then(ExpenseCategory::from_menu_number);

    Ok(match from_menu {
        Some(category) => category.name().to_string(),
        None => value.to_string(),
    })
}
