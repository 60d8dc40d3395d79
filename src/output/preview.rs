//! Markdown preview of the first rows of a table

use crate::table::Table;

/// Formats the column names and the first `limit` rows as a markdown table
///
/// Pipes inside values are escaped so the preview stays one line per row.
pub fn format_preview(table: &Table, limit: usize) -> String {
    let mut md = String::new();

    md.push_str(&format_line(table.columns()));
    md.push('|');
    for _ in table.columns() {
        md.push_str("---|");
    }
    md.push('\n');

    for row in table.rows().iter().take(limit) {
        md.push_str(&format_line(row));
    }

    if table.len() > limit {
        md.push_str(&format!("\n... {} more rows\n", table.len() - limit));
    }

    md
}

fn format_line(values: &[String]) -> String {
    let cells: Vec<String> = values.iter().map(|v| v.replace('|', "\\|")).collect();
    format!("| {} |\n", cells.join(" | "))
}
