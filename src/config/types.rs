use serde::Deserialize;
use std::fmt;

/// Page the baseline run scrapes
pub const DEFAULT_SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_largest_companies_in_the_United_States_by_revenue";

/// Destination the baseline run writes to
pub const DEFAULT_OUTPUT_PATH: &str = "largest_companies_2023.csv";

/// Zero-based position of the target table among all tables on the page
pub const DEFAULT_TABLE_INDEX: usize = 1;

/// Compound class string of the target table
pub const DEFAULT_TABLE_CLASS: &str = "wikitable sortable";

/// Main configuration structure for Table-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub table: TableSelector,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the page comes from and how it is requested
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the page holding the table
    pub url: String,

    /// User-Agent header; a crate-derived default is used when absent
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Overall request timeout in seconds; absent means the client default
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

/// Strategy used to pick one table out of the parsed page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum TableSelector {
    /// Zero-based position among every `table` element in document order
    Index { index: usize },

    /// First `table` matching `class`: one token matches any of the table's
    /// classes, several tokens must equal the whole class attribute
    Class { class: String },
}

impl Default for TableSelector {
    fn default() -> Self {
        Self::Index {
            index: DEFAULT_TABLE_INDEX,
        }
    }
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index { index } => write!(f, "table index {}", index),
            Self::Class { class } => write!(f, "table class \"{}\"", class),
        }
    }
}

/// What happens when a data row's cell count differs from the column count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Append by position: pad short rows, drop overflow cells
    #[default]
    Positional,

    /// Abort the run on the first mismatched row
    Strict,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the delimited output file
    pub path: String,

    /// Field delimiter (single ASCII character)
    pub delimiter: char,

    /// Row alignment policy
    pub alignment: AlignmentPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            delimiter: ',',
            alignment: AlignmentPolicy::Positional,
        }
    }
}
