//! CLI command handlers
//!
//! This module contains the implementation of the direct CLI commands,
//! bridging the clap argument parsing with the store and reports. The
//! interactive menu lives in `crate::menu`.

pub mod category;
pub mod expense;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_add_command, handle_list_command, handle_summary_command};
