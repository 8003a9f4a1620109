//! The expense store
//!
//! Owns the list of expense records and the list of category names, loads
//! them from the persisted document, and rewrites the whole document after
//! every mutation. The store is an explicitly constructed value passed to
//! the CLI handlers; there is no global state.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, PeriodFilter};

use super::file_io::{read_json_lenient, write_json_atomic, LoadedJson};

/// Categories seeded into a fresh document, in menu order
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Others",
];

/// Expenses in a removed category are reassigned here
pub const FALLBACK_CATEGORY: &str = "Others";

/// The entire persisted state, serialized as one JSON object
#[derive(Debug, Clone, Deserialize)]
struct Document {
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default = "default_categories")]
    categories: Vec<String>,
}

/// Borrowed view of the store for serialization
#[derive(Serialize)]
struct DocumentRef<'a> {
    expenses: &'a [Expense],
    categories: &'a [String],
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// How a load went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document existed and parsed
    Loaded,
    /// Document was absent; a fresh one was written with defaults
    Created,
    /// Document existed but was not valid JSON; defaults seeded in memory.
    /// The corrupt file is only overwritten by the next mutation.
    Recovered,
}

/// In-memory expense store backed by a single JSON document
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    categories: Vec<String>,
}

impl ExpenseStore {
    /// Create a store with default state, not yet loaded
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
            categories: default_categories(),
        }
    }

    /// Construct a store and load the persisted document in one step
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<(Self, LoadOutcome)> {
        let mut store = Self::new(path);
        let outcome = store.load()?;
        Ok((store, outcome))
    }

    /// Load the persisted document
    ///
    /// A missing file is created with default categories and no expenses.
    /// A file that is not valid JSON resets the store to defaults without
    /// failing. Any other I/O failure is an error the caller treats as fatal.
    pub fn load(&mut self) -> ExpenseResult<LoadOutcome> {
        match read_json_lenient::<Document, _>(&self.path)? {
            LoadedJson::Parsed(doc) => {
                self.expenses = doc.expenses;
                self.categories = doc.categories;
                Ok(LoadOutcome::Loaded)
            }
            LoadedJson::Missing => {
                self.expenses = Vec::new();
                self.categories = default_categories();
                self.save()?;
                Ok(LoadOutcome::Created)
            }
            LoadedJson::Corrupt => {
                self.expenses = Vec::new();
                self.categories = default_categories();
                Ok(LoadOutcome::Recovered)
            }
        }
    }

    /// Write the whole document back to disk
    pub fn save(&self) -> ExpenseResult<()> {
        let doc = DocumentRef {
            expenses: &self.expenses,
            categories: &self.categories,
        };
        write_json_atomic(&self.path, &doc)
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All expense records in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Category names in insertion order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Expenses matching a period filter, in insertion order
    pub fn filtered(&self, filter: &PeriodFilter) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Record a new expense and persist
    ///
    /// An unknown category is appended to the category list rather than
    /// rejected; the return value reports whether that happened so the shell
    /// can tell the user. A missing date defaults to today. Inputs are
    /// trusted to be pre-validated (amount is non-negative).
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: &str,
        category: &str,
        date: Option<NaiveDate>,
    ) -> ExpenseResult<bool> {
        let registered = if !self.contains_category(category) {
            self.categories.push(category.to_string());
            true
        } else {
            false
        };

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.expenses
            .push(Expense::new(amount, description, category, date));
        self.save()?;

        Ok(registered)
    }

    /// Add a category and persist
    ///
    /// An exact, case-sensitive duplicate is a soft error: nothing is
    /// mutated and nothing is written.
    pub fn add_category(&mut self, name: &str) -> ExpenseResult<()> {
        if name.trim().is_empty() {
            return Err(ExpenseError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.contains_category(name) {
            return Err(ExpenseError::category_exists(name));
        }

        self.categories.push(name.to_string());
        self.save()
    }

    /// Remove a category, reassigning its expenses to the fallback, and persist
    ///
    /// Returns the number of expenses reassigned. A missing name is a soft
    /// error, as is an attempt to remove the fallback category itself; the
    /// fallback must stay available as a reassignment target.
    pub fn remove_category(&mut self, name: &str) -> ExpenseResult<usize> {
        if name == FALLBACK_CATEGORY {
            return Err(ExpenseError::Validation(format!(
                "The '{}' category is the fallback for removed categories and cannot be removed",
                FALLBACK_CATEGORY
            )));
        }

        if !self.contains_category(name) {
            return Err(ExpenseError::category_not_found(name));
        }

        self.categories.retain(|c| c != name);

        let mut reassigned = 0;
        for expense in &mut self.expenses {
            if expense.category == name {
                expense.category = FALLBACK_CATEGORY.to_string();
                reassigned += 1;
            }
        }

        // A loaded document may lack the fallback; restore it so every
        // expense category stays present in the category list.
        if reassigned > 0 && !self.contains_category(FALLBACK_CATEGORY) {
            self.categories.push(FALLBACK_CATEGORY.to_string());
        }

        self.save()?;
        Ok(reassigned)
    }

    fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let (store, outcome) = ExpenseStore::open(path).unwrap();
        assert_eq!(outcome, LoadOutcome::Created);
        (temp_dir, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fresh_open_creates_document_with_defaults() {
        let (temp_dir, store) = create_test_store();

        assert!(temp_dir.path().join("expenses.json").exists());
        assert!(store.expenses().is_empty());
        assert_eq!(store.categories(), &DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_save_load_round_trip() {
        let (temp_dir, mut store) = create_test_store();

        store
            .add_expense(Money::from_cents(4250), "lunch", "Food", Some(date(2024, 3, 15)))
            .unwrap();
        store.add_category("Travel").unwrap();
        store
            .add_expense(Money::from_cents(999), "bus pass", "Transportation", Some(date(2024, 3, 1)))
            .unwrap();

        let path = temp_dir.path().join("expenses.json");
        let (reloaded, outcome) = ExpenseStore::open(path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reloaded.expenses(), store.expenses());
        assert_eq!(reloaded.categories(), store.categories());
    }

    #[test]
    fn test_corrupt_document_recovers_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, "{{ definitely not json").unwrap();

        let (store, outcome) = ExpenseStore::open(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Recovered);
        assert!(store.expenses().is_empty());
        assert_eq!(store.categories(), &DEFAULT_CATEGORIES);

        // Recovery happens in memory; the corrupt file is untouched until
        // the next mutation rewrites it.
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "{{ definitely not json");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, "{}").unwrap();

        let (store, outcome) = ExpenseStore::open(&path).unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(store.expenses().is_empty());
        assert_eq!(store.categories(), &DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_add_expense_persists() {
        let (temp_dir, mut store) = create_test_store();

        let registered = store
            .add_expense(Money::from_cents(4250), "lunch", "Food", Some(date(2024, 3, 15)))
            .unwrap();
        assert!(!registered);

        let (reloaded, _) = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded.expenses().len(), 1);
        assert_eq!(reloaded.expenses()[0].description, "lunch");
        assert_eq!(reloaded.expenses()[0].amount, Money::from_cents(4250));
    }

    #[test]
    fn test_add_expense_auto_registers_unknown_category() {
        let (_temp_dir, mut store) = create_test_store();

        let registered = store
            .add_expense(Money::from_cents(100), "souvenir", "Travel", Some(date(2024, 7, 1)))
            .unwrap();

        assert!(registered);
        assert!(store.categories().contains(&"Travel".to_string()));
        // Appended at the end, existing order untouched
        assert_eq!(store.categories().last().unwrap(), "Travel");
    }

    #[test]
    fn test_add_expense_defaults_to_today() {
        let (_temp_dir, mut store) = create_test_store();

        store
            .add_expense(Money::from_cents(100), "coffee", "Food", None)
            .unwrap();

        let today = Local::now().date_naive();
        assert_eq!(store.expenses()[0].date, today.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_add_duplicate_category_is_soft_error() {
        let (temp_dir, mut store) = create_test_store();

        let err = store.add_category("Food").unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.categories(), &DEFAULT_CATEGORIES);

        // No write happened
        let (reloaded, _) = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded.categories(), &DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let (_temp_dir, mut store) = create_test_store();

        store.add_category("food").unwrap();
        assert!(store.categories().contains(&"food".to_string()));
    }

    #[test]
    fn test_remove_missing_category_is_soft_error() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.remove_category("Travel").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.categories(), &DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_remove_category_reassigns_to_fallback() {
        let (temp_dir, mut store) = create_test_store();

        store
            .add_expense(Money::from_cents(4250), "lunch", "Food", Some(date(2024, 3, 15)))
            .unwrap();
        store
            .add_expense(Money::from_cents(999), "bus", "Transportation", Some(date(2024, 3, 1)))
            .unwrap();

        let reassigned = store.remove_category("Food").unwrap();

        assert_eq!(reassigned, 1);
        assert!(!store.categories().contains(&"Food".to_string()));
        assert_eq!(store.expenses()[0].category, "Others");
        assert_eq!(store.expenses()[1].category, "Transportation");

        let (reloaded, _) = ExpenseStore::open(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded.expenses()[0].category, "Others");
        assert!(!reloaded.categories().contains(&"Food".to_string()));
    }

    #[test]
    fn test_remove_fallback_category_is_rejected() {
        let (_temp_dir, mut store) = create_test_store();

        let err = store.remove_category("Others").unwrap_err();
        assert!(err.is_validation());
        assert!(store.categories().contains(&"Others".to_string()));
    }

    #[test]
    fn test_reassignment_restores_missing_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        // Hand-edited document without "Others" in the category list
        std::fs::write(
            &path,
            r#"{
                "expenses": [
                    {"amount": 5.0, "description": "snack", "category": "Food", "date": "2024-01-02"}
                ],
                "categories": ["Food", "Utilities"]
            }"#,
        )
        .unwrap();

        let (mut store, _) = ExpenseStore::open(&path).unwrap();
        let reassigned = store.remove_category("Food").unwrap();

        assert_eq!(reassigned, 1);
        assert_eq!(store.expenses()[0].category, "Others");
        assert!(store.categories().contains(&"Others".to_string()));
    }

    #[test]
    fn test_filtered() {
        let (_temp_dir, mut store) = create_test_store();

        store
            .add_expense(Money::from_cents(100), "a", "Food", Some(date(2024, 3, 15)))
            .unwrap();
        store
            .add_expense(Money::from_cents(200), "b", "Food", Some(date(2024, 4, 15)))
            .unwrap();
        store
            .add_expense(Money::from_cents(300), "c", "Food", Some(date(2023, 3, 1)))
            .unwrap();

        assert_eq!(store.filtered(&PeriodFilter::all()).len(), 3);
        assert_eq!(store.filtered(&PeriodFilter::month_and_year(3, 2024)).len(), 1);
        assert_eq!(store.filtered(&PeriodFilter::year_only(2024)).len(), 2);
        assert_eq!(store.filtered(&PeriodFilter::month_only(3)).len(), 2);
    }
}
