//! Terminal-based personal expense tracker
//!
//! Records monetary transactions with category, description, and date,
//! persists them to a single local JSON document, and provides filtered
//! listings and per-category totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data file path resolution
//! - `error`: custom error types
//! - `models`: core data models (expenses, money, period filters)
//! - `storage`: the JSON-document-backed expense store
//! - `reports`: filtered register and category summary
//! - `display`: terminal formatting helpers
//! - `cli`: direct command handlers
//! - `menu`: the interactive numbered-menu shell

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
