//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the domain:
//! expense records, money amounts, and period filters.

pub mod expense;
pub mod filter;
pub mod money;

pub use expense::{Expense, DATE_FORMAT};
pub use filter::PeriodFilter;
pub use money::Money;
