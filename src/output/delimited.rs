//! Delimited text writer
//!
//! The first record is the column list, followed by one record per row in
//! insertion order. No index column is written. Fields containing the
//! delimiter, a quote, or a line break are quoted; records end with `\n`.

use crate::table::Table;
use crate::HarvestError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes the table to a file, replacing any existing content
///
/// # Arguments
///
/// * `table` - The assembled table
/// * `path` - Destination file path
/// * `delimiter` - Field delimiter (ASCII)
///
/// # Returns
///
/// * `Ok(())` - File fully written and flushed
/// * `Err(HarvestError::Write)` - Destination could not be created or written
pub fn write_table(table: &Table, path: &Path, delimiter: char) -> Result<(), HarvestError> {
    let to_write_error = |source: io::Error| HarvestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    write_table_to(table, file, delimiter).map_err(to_write_error)?;

    tracing::info!(
        "Wrote {} rows x {} columns to {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(())
}

/// Writes the table to any writer
pub fn write_table_to<W: Write>(table: &Table, writer: W, delimiter: char) -> io::Result<()> {
    let delimiter = u8::try_from(delimiter).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("delimiter {:?} is not a single byte", delimiter),
        )
    })?;

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(table.columns())?;
    for row in table.rows() {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}
