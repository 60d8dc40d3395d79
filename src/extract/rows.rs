use crate::extract::{find_all, text_content};
use scraper::ElementRef;

/// Extracts the data rows of a table
///
/// Every `tr` descendant except the first (the header row) becomes one row;
/// each row holds the trimmed text of its `td` cells in document order.
/// Rows and cells are neither filtered nor reordered, so a row with no `td`
/// cells comes back as an empty vector.
///
/// # Arguments
///
/// * `table` - The located `table` element
///
/// # Returns
///
/// One vector of cell values per data row, in document order
pub fn extract_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    let rows: Vec<Vec<String>> = find_all(table, "tr")
        .skip(1)
        .map(|row| find_all(row, "td").map(text_content).collect())
        .collect();

    tracing::debug!("Extracted {} data rows", rows.len());
    rows
}
