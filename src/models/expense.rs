//! Expense record model
//!
//! An expense is one logged transaction: amount, description, category, and
//! calendar date. Records are immutable once created except for category
//! reassignment when their category is removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Date format used throughout the persisted document
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged expense
///
/// The date is kept as the raw `YYYY-MM-DD` string from the document rather
/// than a parsed date. A hand-edited file can carry a malformed date; such a
/// record still loads and still shows up in unfiltered views, it just never
/// matches a month/year filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (non-negative by the time it reaches the store)
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Category label; always present in the store's category list
    pub category: String,

    /// Calendar date in YYYY-MM-DD form
    pub date: String,
}

impl Expense {
    /// Create a new expense dated to the given calendar date
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Extract (year, month) from the date string
    ///
    /// Returns `None` for a malformed date; callers treat `None` as
    /// "excluded from any filtered view".
    pub fn date_parts(&self) -> Option<(i32, u32)> {
        use chrono::Datelike;

        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .ok()
            .map(|d| (d.year(), d.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_formats_date() {
        let expense = Expense::new(
            Money::from_cents(4250),
            "lunch",
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );

        assert_eq!(expense.date, "2024-03-15");
        assert_eq!(expense.date_parts(), Some((2024, 3)));
    }

    #[test]
    fn test_date_parts_malformed() {
        let mut expense = Expense::new(
            Money::from_cents(100),
            "x",
            "Others",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );

        expense.date = "not-a-date".to_string();
        assert_eq!(expense.date_parts(), None);

        expense.date = "2024-13-40".to_string();
        assert_eq!(expense.date_parts(), None);
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new(
            Money::from_cents(4250),
            "lunch",
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["amount"], serde_json::json!(42.5));
        assert_eq!(json["description"], "lunch");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-03-15");

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }
}
