use crate::extract::{find_all, text_content};
use scraper::ElementRef;

/// Extracts column names from every `th` cell of the table, in document order
///
/// Text is trimmed; duplicates are kept as they appear. A table without any
/// header cells yields an empty vector.
pub fn extract_headers(table: ElementRef<'_>) -> Vec<String> {
    let headers: Vec<String> = find_all(table, "th").map(text_content).collect();
    tracing::debug!("Extracted {} header cells", headers.len());
    headers
}
