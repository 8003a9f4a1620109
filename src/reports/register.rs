//! Expense register
//!
//! A filtered listing of expense records with a running total, rendered as
//! a fixed-width terminal table.

use crate::models::{Expense, Money, PeriodFilter};
use crate::storage::ExpenseStore;

/// A filtered view of the expense list plus the sum of matching amounts
#[derive(Debug, Clone)]
pub struct ExpenseRegister {
    /// Filter this register was generated with
    pub filter: PeriodFilter,
    /// Matching records in insertion order
    pub rows: Vec<Expense>,
    /// Sum of matching amounts
    pub total: Money,
}

impl ExpenseRegister {
    /// Generate a register for the given filter
    pub fn generate(store: &ExpenseStore, filter: PeriodFilter) -> Self {
        let rows: Vec<Expense> = store.filtered(&filter).into_iter().cloned().collect();
        let total = rows.iter().map(|e| e.amount).sum();

        Self {
            filter,
            rows,
            total,
        }
    }

    /// Whether no records matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the register for terminal display
    ///
    /// An empty result set is reported as a message, never as a bare table
    /// with a zero total.
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses to show.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "{:<12} {:<15} {:<10} {}\n",
            "Date", "Category", "Amount", "Description"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for expense in &self.rows {
            output.push_str(&format!(
                "{:<12} {:<15} {:<10} {}\n",
                expense.date,
                expense.category,
                expense.amount.to_string(),
                expense.description
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n", self.total));

        output
    }
}
