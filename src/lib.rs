//! Table-Harvest: a one-page HTML table to delimited-file extractor
//!
//! This crate fetches a single HTML page, locates one table in it, extracts
//! the header and data cells as text, and writes the result as a delimited
//! text file. The run is strictly linear: fetch, parse, locate, extract,
//! assemble, write.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod table;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Table-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("No table found matching {selector}")]
    TableNotFound { selector: String },

    #[error("Located table has no header cells")]
    NoHeaders,

    #[error("Row {row} has {found} cells, expected {expected}")]
    Alignment {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure classes a run can abort with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Fetch did not complete successfully
    Network,
    /// Expected table or header structure absent
    NotFound,
    /// Row cell count differs from column count (strict policy only)
    Alignment,
    /// Destination not writable
    Write,
    /// Configuration could not be loaded or validated
    Config,
}

impl HarvestError {
    /// Returns the failure class of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Config(_) => FailureKind::Config,
            Self::Network { .. } | Self::HttpStatus { .. } | Self::Client(_) => {
                FailureKind::Network
            }
            Self::TableNotFound { .. } | Self::NoHeaders => FailureKind::NotFound,
            Self::Alignment { .. } => FailureKind::Alignment,
            Self::Write { .. } => FailureKind::Write,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Table-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{AlignmentPolicy, Config, TableSelector};
pub use pipeline::{extract_table, run_pipeline, Pipeline, RunSummary};
pub use table::Table;
