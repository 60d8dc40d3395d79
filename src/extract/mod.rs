//! Table extraction from parsed HTML
//!
//! This module turns raw markup into a document tree and pulls one table out
//! of it:
//! - Locating the table by position or by class
//! - Reading the header cells as column names
//! - Reading each data row's cells as text
//!
//! Every search is a descendant search in document order, so nested tables
//! are seen exactly where they appear in the markup.

mod header;
mod locator;
mod rows;

pub use header::extract_headers;
pub use locator::locate_table;
pub use rows::extract_rows;

use scraper::{ElementRef, Html};

/// Parses raw HTML text into a navigable document tree
///
/// html5ever never rejects input; malformed markup is repaired the way a
/// browser would repair it.
pub fn parse_document(raw: &str) -> Html {
    Html::parse_document(raw)
}

/// Finds every descendant element of `scope` named `tag`, in document order
///
/// `scope` itself is never returned.
pub(crate) fn find_all<'a>(
    scope: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == tag)
}

/// Returns the trimmed text content of an element and all its descendants
pub(crate) fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
