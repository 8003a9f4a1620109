//! Data file resolution
//!
//! The tracker keeps everything in one JSON document. Resolution order:
//!
//! 1. `--file` flag
//! 2. `EXPENSE_CLI_DATA_FILE` environment variable (wired through clap)
//! 3. `expenses.json` in the working directory

use std::path::PathBuf;

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_CLI_DATA_FILE";

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Resolve the data file path from an optional CLI override
///
/// The flag and environment variable are both surfaced through the clap
/// argument, so by the time this runs a `None` simply means "use the
/// default".
pub fn data_file(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let path = data_file(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_default() {
        let path = data_file(None);
        assert_eq!(path, PathBuf::from("expenses.json"));
    }
}
