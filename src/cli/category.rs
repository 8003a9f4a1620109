//! Category CLI commands
//!
//! Implements CLI commands for category management. Duplicate adds and
//! missing removals are soft failures: they print a notice and leave both
//! the store and the exit status untouched.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::ExpenseResult;
use crate::storage::{ExpenseStore, FALLBACK_CATEGORY};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category; its expenses move to the fallback category
    Remove {
        /// Category name
        name: String,
    },

    /// List all categories in menu order
    List,
}

/// Handle a category command
pub fn handle_category_command(store: &mut ExpenseStore, cmd: CategoryCommands) -> ExpenseResult<()> {
    match cmd {
        CategoryCommands::Add { name } => {
            let name = name.trim();
            match store.add_category(name) {
                Ok(()) => println!("Category '{}' added successfully.", name),
                Err(err) if err.is_duplicate() => {
                    println!("Category '{}' already exists.", name)
                }
                Err(err) if err.is_validation() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        CategoryCommands::Remove { name } => {
            let name = name.trim();
            match store.remove_category(name) {
                Ok(reassigned) => {
                    println!("Category '{}' removed successfully.", name);
                    if reassigned > 0 {
                        println!(
                            "Reassigned {} expense(s) to '{}'.",
                            reassigned, FALLBACK_CATEGORY
                        );
                    }
                }
                Err(err) if err.is_not_found() => {
                    println!("Category '{}' does not exist.", name)
                }
                Err(err) if err.is_validation() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories()));
        }
    }

    Ok(())
}
