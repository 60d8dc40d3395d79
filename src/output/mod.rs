//! Output module for materializing the extracted table
//!
//! This module handles:
//! - Writing the table as a delimited text file (header line, then one line per row)
//! - Rendering a short markdown preview of the first rows for the console

mod delimited;
mod preview;

pub use delimited::{write_table, write_table_to};
pub use preview::format_preview;
