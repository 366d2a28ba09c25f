//! Expense Summary
//!
//! Totals spending per category and across the whole ledger.

use std::collections::HashMap;

use crate::display::truncate;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Ledger, Money};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
    /// Share of the grand total
    pub percentage: f64,
}

/// Expense Summary
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Categories, largest total first
    pub categories: Vec<CategoryTotal>,
    /// Sum of every expense
    pub grand_total: Money,
    /// Number of expenses in the ledger
    pub expense_count: usize,
}

impl ExpenseSummary {
    /// Summarize a ledger
    ///
    /// Categories are ordered by descending total; equal totals keep the order
    /// in which the categories first appear in the ledger. Fails with
    /// [`ExpenseError::TotalOverflow`] if a total does not fit in an amount.
    pub fn generate(ledger: &Ledger) -> ExpenseResult<Self> {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in ledger {
            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Money::zero(),
                    expense_count: 0,
                    percentage: 0.0,
                });
                categories.len() - 1
            });

            let category = &mut categories[slot];
            category.total = category
                .total
                .checked_add(expense.amount)
                .ok_or(ExpenseError::TotalOverflow)?;
            category.expense_count += 1;
        }

        let grand_total = ledger.total().ok_or(ExpenseError::TotalOverflow)?;

        for category in &mut categories {
            category.percentage = if grand_total.is_zero() {
                0.0
            } else {
                (category.total.cents() as f64 / grand_total.cents() as f64) * 100.0
            };
        }

        // Stable sort keeps first-encounter order for ties
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Ok(Self {
            categories,
            grand_total,
            expense_count: ledger.len(),
        })
    }

    /// Whether there was nothing to summarize
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses to summarise.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "{:<20} {:>6} {:>14} {:>7}\n",
            "Category", "Count", "Total", "%"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>6} {:>14} {:>6.1}%\n",
                truncate(&category.category, 20),
                category.expense_count,
                category.total.format_with_symbol(currency_symbol),
                category.percentage
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>6} {:>14}\n",
            "GRAND TOTAL",
            self.expense_count,
            self.grand_total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("\n({} expense(s) recorded)\n", self.expense_count));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId};
    use chrono::{NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn ledger(entries: &[(&str, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (category, cents) in entries {
            ledger
                .add(now(), "item", category, Money::from_cents(*cents))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_ledger() {
        let summary = ExpenseSummary::generate(&Ledger::new()).unwrap();
        assert!(summary.is_empty());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.grand_total, Money::zero());
        assert!(summary
            .format_terminal("₹")
            .contains("No expenses to summarise"));
    }

    #[test]
    fn test_single_expense() {
        let summary = ExpenseSummary::generate(&ledger(&[("Food", 25000)])).unwrap();
        assert_eq!(summary.grand_total, Money::from_cents(25000));
        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].category, "Food");
        assert!((summary.categories[0].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let summary = ExpenseSummary::generate(&ledger(&[
            ("Travel", 500),
            ("Food", 300),
            ("Bills", 500),
            ("Food", 300),
            ("Fun", 100),
        ]))
        .unwrap();

        let order: Vec<_> = summary
            .categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["Food", "Travel", "Bills", "Fun"]);
        assert_eq!(summary.categories[0].expense_count, 2);
    }

    #[test]
    fn test_category_totals_add_up() {
        let summary = ExpenseSummary::generate(&ledger(&[
            ("Food", 1999),
            ("Travel", 4550),
            ("Food", 1),
            ("Other", 1500000),
        ]))
        .unwrap();

        let sum = Money::checked_sum(summary.categories.iter().map(|c| c.total));
        assert_eq!(sum, Some(summary.grand_total));
        assert_eq!(summary.grand_total, Money::from_cents(1506550));
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let expenses = (1..=2)
            .map(|id| Expense::new(ExpenseId::new(id), now(), "big", "Other", huge))
            .collect::<Vec<_>>();

        let err = ExpenseSummary::generate(&Ledger::from(expenses)).unwrap_err();
        assert!(matches!(err, ExpenseError::TotalOverflow));
    }

    #[test]
    fn test_largest_amounts_sum() {
        let max = Money::MAX.cents();
        let summary = ExpenseSummary::generate(&ledger(&[("A", max), ("A", max)])).unwrap();
        assert_eq!(summary.grand_total.cents(), max * 2);
        assert_eq!(summary.categories[0].total, summary.grand_total);
    }

    #[test]
    fn test_format_terminal() {
        let summary =
            ExpenseSummary::generate(&ledger(&[("Food", 25000), ("Other", 1500000)])).unwrap();
        let output = summary.format_terminal("₹");

        assert!(output.contains("GRAND TOTAL"));
        assert!(output.contains("₹15250.00"));
        assert!(output.contains("(2 expense(s) recorded)"));
        let other = output.find("Other").unwrap();
        let food = output.find("Food").unwrap();
        assert!(other < food);
    }
}
