//! Interactive numbered menu
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so the binary
//! drives it with stdin/stdout and tests drive it with in-memory buffers.
//! Rejected input is reported and the menu carries on; only a failure to
//! write to the output ends the session with an error.

use std::fmt;
use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_expense_added, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{
    parse_amount, validate_description, AddExpenseInput, DeleteOutcome, ExpenseService,
};
use crate::storage::Storage;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Summary,
    Exit,
}

impl MenuChoice {
    /// All choices in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Delete,
        MenuChoice::Summary,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this choice
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Summary => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Expense",
            MenuChoice::View => "View All Expenses",
            MenuChoice::Delete => "Delete Expense",
            MenuChoice::Summary => "Summary / Total",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Match user input against the menu keys
    pub fn from_input(input: &str) -> Option<Self> {
        let key: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.label())
    }
}

/// Interactive menu session
pub struct Menu<'a, R, W> {
    service: ExpenseService<'a>,
    currency_symbol: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over the given storage and streams
    pub fn new(storage: &'a Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            service: ExpenseService::new(storage),
            currency_symbol: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Run until the user picks Exit or the input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Personal Expense Tracker")?;

        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Enter choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::from_input(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(
                    self.output,
                    "Invalid choice '{}'. Please enter a number from 1 to 5.",
                    line
                )?,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        match choice {
            MenuChoice::Add => self.add_expense(),
            MenuChoice::View => self.view_expenses(),
            MenuChoice::Delete => self.delete_expense(),
            MenuChoice::Summary => self.show_summary(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "  {}", choice)?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn warn(&mut self, err: &ExpenseError) -> ExpenseResult<()> {
        writeln!(self.output, "Warning: {}", err)?;
        Ok(())
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n-- Add Expense --")?;

        let Some(description) = self.prompt("Description (e.g. Lunch, Rent): ")? else {
            return Ok(());
        };
        if let Err(e) = validate_description(&description) {
            return self.warn(&e);
        }

        let Some(category) = self.prompt("Category (e.g. Food, Travel, Bills) [Other]: ")? else {
            return Ok(());
        };

        let amount_prompt = format!("Amount ({}): ", self.currency_symbol);
        let amount = loop {
            let Some(text) = self.prompt(&amount_prompt)? else {
                return Ok(());
            };
            match parse_amount(&text) {
                Ok(_) => break text,
                Err(e) => self.warn(&e)?,
            }
        };

        let result = self.service.add(AddExpenseInput {
            description,
            category: Some(category),
            amount,
        });

        match result {
            Ok(expense) => {
                let line = format_expense_added(&expense, &self.currency_symbol);
                writeln!(self.output, "{}", line)?;
                Ok(())
            }
            Err(e) => self.warn(&e),
        }
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n-- All Expenses --")?;
        let expenses = self.service.list()?;
        let table = format_expense_table(&expenses, &self.currency_symbol);
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn delete_expense(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n-- Delete Expense --")?;
        let expenses = self.service.list()?;
        let table = format_expense_table(&expenses, &self.currency_symbol);
        write!(self.output, "{}", table)?;
        if expenses.is_empty() {
            return Ok(());
        }

        let id = loop {
            let Some(text) = self.prompt("Enter the ID to delete (0 to cancel): ")? else {
                return Ok(());
            };
            match text.parse::<i64>() {
                Ok(id) => break id,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        };

        // Negative IDs can never match, report them like any unknown ID
        let result = match u32::try_from(id) {
            Ok(id) => self.service.delete(id),
            Err(_) => Err(ExpenseError::expense_not_found(id)),
        };

        match result {
            Ok(DeleteOutcome::Cancelled) => writeln!(self.output, "Cancelled.")?,
            Ok(DeleteOutcome::Deleted(expense)) => writeln!(
                self.output,
                "Deleted expense #{} ({}). Remaining IDs have been renumbered.",
                expense.id, expense.description
            )?,
            Err(e) => self.warn(&e)?,
        }

        Ok(())
    }

    fn show_summary(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n-- Summary --")?;
        match self.service.summarize() {
            Ok(summary) => {
                let report = summary.format_terminal(&self.currency_symbol);
                write!(self.output, "{}", report)?;
                Ok(())
            }
            Err(e) => self.warn(&e),
        }
    }
}
