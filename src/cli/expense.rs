//! Expense CLI commands
//!
//! Implements the direct (non-interactive) add/list/summary commands,
//! bridging clap argument parsing with the store and reports.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, PeriodFilter, DATE_FORMAT};
use crate::reports::{CategorySummary, ExpenseRegister};
use crate::storage::ExpenseStore;

/// Handle `expenses add`
pub fn handle_add_command(
    store: &mut ExpenseStore,
    amount: &str,
    description: &str,
    category: &str,
    date: Option<&str>,
) -> ExpenseResult<()> {
    let amount = Money::parse(amount)
        .map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))?;
    if amount.is_negative() {
        return Err(ExpenseError::Validation("Amount cannot be negative".into()));
    }

    let date = match date {
        Some(s) => Some(NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
            ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        })?),
        None => None,
    };

    let category = category.trim();
    let registered = store.add_expense(amount, description.trim(), category, date)?;

    if registered {
        println!(
            "Category '{}' not found. Adding it to categories.",
            category
        );
    }
    println!("Expense added successfully!");

    Ok(())
}

/// Handle `expenses list`
pub fn handle_list_command(
    store: &ExpenseStore,
    month: Option<u32>,
    year: Option<i32>,
) -> ExpenseResult<()> {
    let filter = PeriodFilter { month, year };
    let register = ExpenseRegister::generate(store, filter);
    print!("{}", register.format_terminal());
    Ok(())
}

/// Handle `expenses summary`
pub fn handle_summary_command(
    store: &ExpenseStore,
    month: Option<u32>,
    year: Option<i32>,
) -> ExpenseResult<()> {
    let filter = PeriodFilter { month, year };
    let summary = CategorySummary::generate(store, filter);
    print!("{}", summary.format_terminal());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_add_records_expense() {
        let (_temp_dir, mut store) = create_test_store();

        handle_add_command(&mut store, "42.50", "lunch", "Food", Some("2024-03-15")).unwrap();

        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].amount, Money::from_cents(4250));
        assert_eq!(store.expenses()[0].date, "2024-03-15");
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let (_temp_dir, mut store) = create_test_store();

        let err = handle_add_command(&mut store, "abc", "lunch", "Food", None).unwrap_err();
        assert!(err.is_validation());
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let (_temp_dir, mut store) = create_test_store();

        let err = handle_add_command(&mut store, "-5", "refund", "Food", None).unwrap_err();
        assert!(err.is_validation());
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let (_temp_dir, mut store) = create_test_store();

        let err =
            handle_add_command(&mut store, "5", "lunch", "Food", Some("15/03/2024")).unwrap_err();
        assert!(err.is_validation());
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_list_and_summary_run_on_empty_store() {
        let (_temp_dir, store) = create_test_store();

        handle_list_command(&store, None, None).unwrap();
        handle_summary_command(&store, Some(3), Some(2024)).unwrap();
    }
}
