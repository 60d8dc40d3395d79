//! In-memory table assembly
//!
//! A [`Table`] holds the column names taken from the header row and the data
//! rows in insertion order. Every value stays textual; nothing is coerced,
//! deduplicated, or sorted.

use crate::config::AlignmentPolicy;
use crate::HarvestError;

/// One extracted data row
pub type Row = Vec<String>;

/// Column names plus rows, in the order they were appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    policy: AlignmentPolicy,
    misaligned: usize,
}

impl Table {
    /// Creates an empty table with the given columns
    ///
    /// # Returns
    ///
    /// * `Ok(Table)` - Empty table ready for rows
    /// * `Err(HarvestError::NoHeaders)` - The column list is empty
    pub fn new(columns: Vec<String>, policy: AlignmentPolicy) -> Result<Self, HarvestError> {
        if columns.is_empty() {
            return Err(HarvestError::NoHeaders);
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
            policy,
            misaligned: 0,
        })
    }

    /// Appends a row after all existing rows
    ///
    /// Under [`AlignmentPolicy::Positional`] a short row is padded with empty
    /// values and a long row loses its overflow cells. Under
    /// [`AlignmentPolicy::Strict`] a mismatched row is rejected and the
    /// table is left unchanged.
    pub fn push_row(&mut self, mut row: Row) -> Result<(), HarvestError> {
        let expected = self.columns.len();
        let found = row.len();
        // 1-based, counting data rows only
        let row_number = self.rows.len() + 1;

        if found != expected {
            match self.policy {
                AlignmentPolicy::Strict => {
                    return Err(HarvestError::Alignment {
                        row: row_number,
                        expected,
                        found,
                    });
                }
                AlignmentPolicy::Positional => {
                    tracing::warn!(
                        "Row {} has {} cells but the table has {} columns; appending by position",
                        row_number,
                        found,
                        expected
                    );
                    row.resize(expected, String::new());
                    self.misaligned += 1;
                }
            }
        }

        tracing::trace!("Row {}: {:?}", row_number, row);
        self.rows.push(row);
        Ok(())
    }

    /// Column names, in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows appended so far
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows have been appended
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows that were padded or truncated on the way in
    pub fn misaligned_rows(&self) -> usize {
        self.misaligned
    }

    /// Values of the first column with the given name, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let position = self.columns.iter().position(|column| column == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row[position].as_str())
                .collect(),
        )
    }
}
