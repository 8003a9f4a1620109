//! Configuration and path management

pub mod paths;

pub use paths::{data_file, DATA_FILE_ENV, DEFAULT_DATA_FILE};
