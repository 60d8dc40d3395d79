//! Pipeline driver
//!
//! This module runs the whole extraction as one linear sequence:
//! fetch, parse, locate, extract headers, assemble rows, write.
//! The first failure aborts the run; there is no partial result and no
//! resume. The output file is only created once extraction has succeeded.

mod fetcher;

pub use fetcher::{build_http_client, default_user_agent, fetch_page, RawDocument};

use crate::config::{validate, AlignmentPolicy, Config, TableSelector};
use crate::extract::{extract_headers, extract_rows, locate_table, parse_document};
use crate::output::{format_preview, write_table};
use crate::table::Table;
use crate::HarvestError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Number of rows rendered into [`RunSummary::preview`]
pub const PREVIEW_ROWS: usize = 5;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub source_url: String,
    pub output_path: PathBuf,
    pub columns: usize,
    pub rows: usize,
    /// Rows padded or truncated under the positional policy
    pub misaligned_rows: usize,
    pub bytes_fetched: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Markdown rendering of the header and first rows
    pub preview: String,
}

impl RunSummary {
    /// Wall-clock duration of the run in milliseconds
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Single-run extraction pipeline
pub struct Pipeline {
    config: Config,
    client: Client,
}

impl Pipeline {
    /// Validates the configuration and builds the HTTP client
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        validate(&config)?;
        let client = build_http_client(&config.source)?;
        Ok(Self { config, client })
    }

    /// Runs fetch, extraction and write in order
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` - The output file was fully written
    /// * `Err(HarvestError)` - The run aborted at the first failing step
    pub async fn run(&self) -> Result<RunSummary, HarvestError> {
        let started_at = Utc::now();

        let raw = fetch_page(&self.client, &self.config.source.url).await?;

        let table = extract_table(
            &raw.body,
            &self.config.table,
            self.config.output.alignment,
        )?;

        let output_path = Path::new(&self.config.output.path);
        write_table(&table, output_path, self.config.output.delimiter)?;

        Ok(RunSummary {
            source_url: raw.final_url,
            output_path: output_path.to_path_buf(),
            columns: table.columns().len(),
            rows: table.len(),
            misaligned_rows: table.misaligned_rows(),
            bytes_fetched: raw.body.len(),
            started_at,
            finished_at: Utc::now(),
            preview: format_preview(&table, PREVIEW_ROWS),
        })
    }
}

/// Extracts the selected table from raw HTML into an in-memory [`Table`]
///
/// # Arguments
///
/// * `raw` - Page markup
/// * `selector` - Table selection strategy
/// * `policy` - What to do with rows whose cell count differs from the column count
///
/// # Example
///
/// ```
/// use table_harvest::{extract_table, AlignmentPolicy, TableSelector};
///
/// let html = "<table><tr><th>Rank</th><th>Name</th></tr><tr><td>1</td><td>Acme</td></tr></table>";
/// let table = extract_table(html, &TableSelector::Index { index: 0 }, AlignmentPolicy::Strict).unwrap();
/// assert_eq!(table.columns(), ["Rank", "Name"]);
/// assert_eq!(table.len(), 1);
/// ```
pub fn extract_table(
    raw: &str,
    selector: &TableSelector,
    policy: AlignmentPolicy,
) -> Result<Table, HarvestError> {
    let document = parse_document(raw);
    let located = locate_table(&document, selector)?;

    let headers = extract_headers(located);
    tracing::info!("Columns: {:?}", headers);
    let mut table = Table::new(headers, policy)?;

    for row in extract_rows(located) {
        table.push_row(row)?;
    }

    if table.misaligned_rows() > 0 {
        tracing::warn!(
            "{} of {} rows did not match the column count",
            table.misaligned_rows(),
            table.len()
        );
    }
    tracing::info!("Assembled {} rows", table.len());

    Ok(table)
}

/// Runs a complete extraction with the given configuration
pub async fn run_pipeline(config: Config) -> Result<RunSummary, HarvestError> {
    Pipeline::new(config)?.run().await
}
