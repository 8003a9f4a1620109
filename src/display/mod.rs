//! Display formatting for terminal output

pub mod category;

pub use category::format_category_list;
