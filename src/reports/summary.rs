//! Category summary report
//!
//! Groups matching expenses by category, summing the amount per category,
//! with a grand total. Categories appear in first-seen order among the
//! matching records.

use crate::models::{Money, PeriodFilter};
use crate::storage::ExpenseStore;

/// Total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of matching amounts in this category
    pub total: Money,
    /// Number of matching records in this category
    pub count: usize,
}

/// Per-category totals over a filtered view of the expense list
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// Filter this summary was generated with
    pub filter: PeriodFilter,
    /// Per-category totals, in first-seen order among matching records
    pub rows: Vec<CategoryTotal>,
    /// Grand total; equals the sum of the per-category totals
    pub total: Money,
}

impl CategorySummary {
    /// Generate a summary for the given filter
    pub fn generate(store: &ExpenseStore, filter: PeriodFilter) -> Self {
        let mut rows: Vec<CategoryTotal> = Vec::new();
        let mut total = Money::zero();

        for expense in store.filtered(&filter) {
            total += expense.amount;

            match rows.iter_mut().find(|r| r.category == expense.category) {
                Some(row) => {
                    row.total += expense.amount;
                    row.count += 1;
                }
                None => rows.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

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

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses to show.\n".to_string();
        }

        let mut output = String::new();

        output.push_str(&format!("{:<20} {}\n", "Category", "Amount Spent"));
        output.push_str(&"-".repeat(34));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!("{:<20} {}\n", row.category, row.total));
        }

        output.push_str(&"-".repeat(34));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n", self.total));

        output
    }
}
