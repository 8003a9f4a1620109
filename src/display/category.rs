//! Category display formatting
//!
//! Formats the category list for terminal output. The numbered form doubles
//! as the selection list in the interactive menu.

/// Format categories as a numbered list, one per line
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let mut output = String::new();
    for (idx, category) in categories.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, category));
    }

    output
}
