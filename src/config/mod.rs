//! Configuration module for Table-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; anything left out falls back to the baseline run
//! (the Wikipedia revenue list, table index 1, `largest_companies_2023.csv`).
//!
//! # Example
//!
//! ```no_run
//! use table_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Writing to: {}", config.output.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AlignmentPolicy, Config, OutputConfig, SourceConfig, TableSelector, DEFAULT_OUTPUT_PATH,
    DEFAULT_SOURCE_URL, DEFAULT_TABLE_CLASS, DEFAULT_TABLE_INDEX,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
