//! Interactive menu shell
//!
//! A numbered-menu loop over the expense store: add expenses, view filtered
//! listings and summaries, and manage categories. All input validation
//! happens here; invalid input prints a notice and drops back to the menu,
//! it never reaches the store.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::display::format_category_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, PeriodFilter, DATE_FORMAT};
use crate::reports::{CategorySummary, ExpenseRegister};
use crate::storage::{ExpenseStore, FALLBACK_CATEGORY};

/// Run the interactive menu loop until the user exits
pub fn run(store: &mut ExpenseStore) -> ExpenseResult<()> {
    loop {
        print_main_menu();
        let choice = prompt("Select an option (1-5): ")?;

        match choice.as_str() {
            "1" => add_expense(store)?,
            "2" => view_expenses(store)?,
            "3" => view_summary(store)?,
            "4" => manage_categories(store)?,
            "5" => {
                println!("Exiting Expense Tracker. Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid selection. Please choose a valid option (1-5)."),
        }
    }
}

fn print_main_menu() {
    println!();
    println!("===== Expense Tracker =====");
    println!("1. Add Expense");
    println!("2. View Expenses");
    println!("3. View Summary");
    println!("4. Manage Categories");
    println!("5. Exit");
}

fn add_expense(store: &mut ExpenseStore) -> ExpenseResult<()> {
    let input = prompt("Enter amount spent: $")?;
    let amount = match Money::parse(&input) {
        Ok(amount) if amount.is_negative() => {
            println!("Amount cannot be negative.");
            return Ok(());
        }
        Ok(amount) => amount,
        Err(_) => {
            println!("Invalid amount. Please enter a numerical value.");
            return Ok(());
        }
    };

    let description = prompt("Enter description: ")?;

    println!("Select a category from the following list:");
    print!("{}", format_category_list(store.categories()));
    let input = prompt(&format!(
        "Enter category number (1-{}): ",
        store.categories().len()
    ))?;
    let category = match input.parse::<usize>() {
        Ok(n) if (1..=store.categories().len()).contains(&n) => store.categories()[n - 1].clone(),
        Ok(_) => {
            println!("Invalid category selection.");
            return Ok(());
        }
        Err(_) => {
            println!("Invalid input. Please enter a number corresponding to the category.");
            return Ok(());
        }
    };

    let input = prompt("Enter date (YYYY-MM-DD) or press Enter for today: ")?;
    let date = if input.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                println!("Invalid date format. Please use YYYY-MM-DD.");
                return Ok(());
            }
        }
    };

    store.add_expense(amount, &description, &category, date)?;
    println!("Expense added successfully!");
    Ok(())
}

fn view_expenses(store: &ExpenseStore) -> ExpenseResult<()> {
    println!();
    println!("--- View Expenses ---");
    let Some(filter) = prompt_period_filter("Filter")? else {
        return Ok(());
    };

    let register = ExpenseRegister::generate(store, filter);
    print!("{}", register.format_terminal());
    Ok(())
}

fn view_summary(store: &ExpenseStore) -> ExpenseResult<()> {
    println!();
    println!("--- View Summary ---");
    let Some(filter) = prompt_period_filter("Summary")? else {
        return Ok(());
    };

    let summary = CategorySummary::generate(store, filter);
    print!("{}", summary.format_terminal());
    Ok(())
}

/// Prompt for one of the four filter choices
///
/// Returns `None` when the selection or a month/year value was invalid; the
/// caller drops back to the main menu.
fn prompt_period_filter(label: &str) -> ExpenseResult<Option<PeriodFilter>> {
    println!("{} options:", label);
    println!("1. No Filter");
    println!("2. Filter by Month and Year");
    println!("3. Filter by Year");
    println!("4. Filter by Month");
    let choice = prompt(&format!("Select a {} option (1-4): ", label.to_lowercase()))?;

    let filter = match choice.as_str() {
        "1" => PeriodFilter::all(),
        "2" => {
            let Some(month) = prompt_month()? else {
                return Ok(None);
            };
            let Some(year) = prompt_year()? else {
                return Ok(None);
            };
            PeriodFilter::month_and_year(month, year)
        }
        "3" => {
            let Some(year) = prompt_year()? else {
                return Ok(None);
            };
            PeriodFilter::year_only(year)
        }
        "4" => {
            let Some(month) = prompt_month()? else {
                return Ok(None);
            };
            PeriodFilter::month_only(month)
        }
        _ => {
            println!("Invalid selection.");
            return Ok(None);
        }
    };

    Ok(Some(filter))
}

fn prompt_month() -> ExpenseResult<Option<u32>> {
    let input = prompt("Enter month (1-12): ")?;
    match input.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(Some(month)),
        Ok(_) => {
            println!("Invalid month.");
            Ok(None)
        }
        Err(_) => {
            println!("Invalid input. Please enter a numerical value for month.");
            Ok(None)
        }
    }
}

fn prompt_year() -> ExpenseResult<Option<i32>> {
    let input = prompt("Enter year (e.g., 2023): ")?;
    match input.parse::<i32>() {
        Ok(year) => Ok(Some(year)),
        Err(_) => {
            println!("Invalid input. Please enter a numerical value for year.");
            Ok(None)
        }
    }
}

fn manage_categories(store: &mut ExpenseStore) -> ExpenseResult<()> {
    loop {
        println!();
        println!("--- Manage Categories ---");
        println!("1. Add Category");
        println!("2. Remove Category");
        println!("3. View Categories");
        println!("4. Back to Main Menu");
        let choice = prompt("Select an option (1-4): ")?;

        match choice.as_str() {
            "1" => {
                let name = prompt("Enter new category name: ")?;
                if name.is_empty() {
                    println!("Category name cannot be empty.");
                    continue;
                }
                match store.add_category(&name) {
                    Ok(()) => println!("Category '{}' added successfully.", name),
                    Err(err) if err.is_duplicate() => {
                        println!("Category '{}' already exists.", name)
                    }
                    Err(err) if err.is_validation() => println!("{}", err),
                    Err(err) => return Err(err),
                }
            }

            "2" => {
                println!("Existing Categories:");
                print!("{}", format_category_list(store.categories()));
                let input = prompt(&format!(
                    "Enter category number to remove (1-{}): ",
                    store.categories().len()
                ))?;
                let name = match input.parse::<usize>() {
                    Ok(n) if (1..=store.categories().len()).contains(&n) => {
                        store.categories()[n - 1].clone()
                    }
                    _ => {
                        println!("Invalid input. Please enter a number corresponding to the category.");
                        continue;
                    }
                };
                match store.remove_category(&name) {
                    Ok(reassigned) => {
                        println!("Category '{}' removed successfully.", name);
                        if reassigned > 0 {
                            println!(
                                "Reassigned {} expense(s) to '{}'.",
                                reassigned, FALLBACK_CATEGORY
                            );
                        }
                    }
                    Err(err) if err.is_validation() => println!("{}", err),
                    Err(err) if err.is_not_found() => {
                        println!("Category '{}' does not exist.", name)
                    }
                    Err(err) => return Err(err),
                }
            }

            "3" => {
                println!();
                println!("--- Categories ---");
                print!("{}", format_category_list(store.categories()));
            }

            "4" => return Ok(()),

            _ => println!("Invalid selection. Please choose between 1-4."),
        }
    }
}

/// Print a prompt, flush, and read one trimmed line from stdin
///
/// End of input mid-session is an I/O error; the process exits non-zero
/// rather than spinning on an exhausted stream.
fn prompt(text: &str) -> ExpenseResult<String> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(ExpenseError::Io("unexpected end of input".into()));
    }

    Ok(line.trim().to_string())
}
