use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add_command, handle_category_command, handle_list_command, handle_summary_command,
    CategoryCommands,
};
use expense_cli::config;
use expense_cli::menu;
use expense_cli::storage::{ExpenseStore, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "A personal expense tracker for the terminal. Logs transactions \
                  with category, description, and date into a single JSON file, \
                  and shows filtered listings and per-category totals. Run with \
                  no arguments for the interactive menu."
)]
struct Cli {
    /// Data file holding expenses and categories
    #[arg(short, long, env = "EXPENSE_CLI_DATA_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    /// Add a new expense
    Add {
        /// Amount spent (e.g., "42.50")
        amount: String,
        /// Description
        description: String,
        /// Category name (an unknown name is added to the category list)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, optionally filtered by month/year
    List {
        /// Filter by month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Filter by year (e.g., 2024)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show per-category spending totals, optionally filtered by month/year
    Summary {
        /// Filter by month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Filter by year (e.g., 2024)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = config::data_file(cli.file);
    let (mut store, outcome) = ExpenseStore::open(path)?;

    if outcome == LoadOutcome::Recovered {
        eprintln!("Error: Corrupted data file. Starting with empty data.");
    }

    match cli.command {
        None | Some(Commands::Menu) => menu::run(&mut store)?,

        Some(Commands::Add {
            amount,
            description,
            category,
            date,
        }) => handle_add_command(&mut store, &amount, &description, &category, date.as_deref())?,

        Some(Commands::List { month, year }) => handle_list_command(&store, month, year)?,

        Some(Commands::Summary { month, year }) => handle_summary_command(&store, month, year)?,

        Some(Commands::Category(cmd)) => handle_category_command(&mut store, cmd)?,
    }

    Ok(())
}
