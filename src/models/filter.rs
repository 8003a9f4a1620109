//! Month/year period filter
//!
//! Views and summaries narrow the expense list by an optional (month, year)
//! pair. An expense with an unparseable date never matches a filtered view
//! but does match the unfiltered one.

use std::fmt;

use super::Expense;

/// An optional (month, year) pair narrowing which expenses a view considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodFilter {
    /// Month to match (1-12)
    pub month: Option<u32>,
    /// Year to match
    pub year: Option<i32>,
}

impl PeriodFilter {
    /// A filter that matches everything
    pub const fn all() -> Self {
        Self {
            month: None,
            year: None,
        }
    }

    /// Filter by month and year
    pub const fn month_and_year(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
        }
    }

    /// Filter by year only
    pub const fn year_only(year: i32) -> Self {
        Self {
            month: None,
            year: Some(year),
        }
    }

    /// Filter by month only (any year)
    pub const fn month_only(month: u32) -> Self {
        Self {
            month: Some(month),
            year: None,
        }
    }

    /// Check whether no narrowing is in effect
    pub const fn is_all(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    /// Check whether an expense matches this filter
    ///
    /// With no narrowing every record matches, including ones whose date
    /// fails to parse. With any narrowing, an unparseable date is excluded.
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.is_all() {
            return true;
        }

        match expense.date_parts() {
            Some((year, month)) => {
                self.month.map_or(true, |m| m == month) && self.year.map_or(true, |y| y == year)
            }
            None => false,
        }
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.year) {
            (Some(m), Some(y)) => write!(f, "{}-{:02}", y, m),
            (None, Some(y)) => write!(f, "{}", y),
            (Some(m), None) => write!(f, "month {:02}", m),
            (None, None) => write!(f, "all dates"),
        }
    }
}
