//! CLI commands for expense management
//!
//! Implements the non-interactive expense subcommands.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_added, format_expense_table};
use crate::error::ExpenseResult;
use crate::services::{AddExpenseInput, DeleteOutcome, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount spent (e.g. 250, 12.50, ₹99)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show all expenses
    #[command(alias = "view")]
    List,

    /// Delete an expense by ID (0 cancels); later IDs shift down by one
    #[command(alias = "rm")]
    Delete {
        /// Expense ID as shown by `list`
        id: u32,
    },

    /// Show totals per category and the grand total
    #[command(alias = "total")]
    Summary,

    /// Show recent additions and deletions from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let expense = service.add(AddExpenseInput {
                description,
                category,
                amount,
            })?;
            println!("{}", format_expense_added(&expense, symbol));
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses, symbol));
            if !expenses.is_empty() {
                println!("{} expense(s)", expenses.len());
            }
        }

        ExpenseCommands::Delete { id } => match service.delete(id)? {
            DeleteOutcome::Cancelled => println!("Cancelled."),
            DeleteOutcome::Deleted(expense) => {
                println!(
                    "Deleted expense #{} ({}, {}).",
                    expense.id,
                    expense.description,
                    expense.amount.format_with_symbol(symbol)
                );
            }
        },

        ExpenseCommands::Summary => {
            let summary = service.summarize()?;
            print!("{}", summary.format_terminal(symbol));
        }

        ExpenseCommands::History { limit } => {
            let Some(audit) = storage.audit() else {
                println!("The audit log is disabled in the configuration.");
                return Ok(());
            };

            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
