//! Table locator
//!
//! Picks exactly one `table` element out of a parsed page using one of the
//! two [`TableSelector`] strategies. There is no fallback: if the strategy
//! finds nothing the run stops with [`HarvestError::TableNotFound`].

use crate::config::TableSelector;
use crate::extract::find_all;
use crate::HarvestError;
use scraper::{ElementRef, Html};

/// Locates the target table in the parsed document
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `selector` - Strategy used to choose the table
///
/// # Returns
///
/// * `Ok(ElementRef)` - The selected `table` element
/// * `Err(HarvestError::TableNotFound)` - Index out of range or no class match
///
/// # Example
///
/// ```
/// use table_harvest::config::TableSelector;
/// use table_harvest::extract::{locate_table, parse_document};
///
/// let document = parse_document(r#"<table class="nav"></table><table class="wikitable sortable"></table>"#);
/// let selector = TableSelector::Class { class: "wikitable sortable".to_string() };
/// let table = locate_table(&document, &selector).unwrap();
/// assert!(table.value().classes().any(|c| c == "wikitable"));
/// ```
pub fn locate_table<'a>(
    document: &'a Html,
    selector: &TableSelector,
) -> Result<ElementRef<'a>, HarvestError> {
    let mut tables = find_all(document.root_element(), "table");

    let found = match selector {
        TableSelector::Index { index } => tables.nth(*index),
        TableSelector::Class { class } => {
            let wanted: Vec<&str> = class.split_whitespace().collect();
            tables.find(|table| matches_class(*table, &wanted))
        }
    };

    match found {
        Some(table) => {
            tracing::debug!("Located table by {}", selector);
            Ok(table)
        }
        None => Err(HarvestError::TableNotFound {
            selector: selector.to_string(),
        }),
    }
}

/// Returns true if the element's class attribute matches the filter tokens
///
/// A single token matches any one of the element's classes. Several tokens
/// must equal the whole class attribute, token for token in the same order.
fn matches_class(element: ElementRef<'_>, wanted: &[&str]) -> bool {
    match wanted {
        [] => false,
        [single] => element.value().classes().any(|class| class == *single),
        _ => element
            .value()
            .attr("class")
            .map(|attr| attr.split_whitespace().eq(wanted.iter().copied()))
            .unwrap_or(false),
    }
}
