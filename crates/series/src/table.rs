//! A date-indexed table of named numeric columns.
//!
//! A [`SeriesTable`] holds at most one row per [`DateKey`]. Columns are
//! appended over time, one per series drawn on the same chart; writing to a
//! date that already has a row updates that row in place. Rows are always
//! kept in ascending date order so the table can be handed to a renderer
//! as is.

use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::trace;

use crate::date::DateKey;
use crate::error::TableError;
use crate::id::TableId;

/// A handle to a column of a specific [`SeriesTable`].
///
/// Handles are only valid for the table that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnIndex {
    table: TableId,
    index: usize,
}

impl ColumnIndex {
    /// The position of the column among the table's numeric columns.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Display for ColumnIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} of table {}", self.index, self.table)
    }
}

/// One row of a [`SeriesTable`]: the date and one cell per column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    /// The row key.
    pub date: DateKey,
    /// The cells, in column order. `None` is an empty cell.
    pub cells: &'a [Option<f64>],
}

/// A table with one row per date and an ordered set of named columns.
#[derive(Debug)]
pub struct SeriesTable {
    id: TableId,
    columns: Vec<String>,
    rows: BTreeMap<DateKey, Vec<Option<f64>>>,
}

impl SeriesTable {
    /// Creates an empty table without columns.
    pub fn new() -> SeriesTable {
        Self {
            id: TableId::next(),
            columns: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Appends a column and returns its handle.
    ///
    /// Every existing row gets an empty cell in the new column.
    pub fn add_column(&mut self, name: impl Into<String>) -> ColumnIndex {
        let index = self.columns.len();
        self.columns.push(name.into());

        for cells in self.rows.values_mut() {
            cells.push(None);
        }

        ColumnIndex {
            table: self.id,
            index,
        }
    }

    /// Sets the cell at (`date`, `column`) to `value`.
    ///
    /// If no row exists for `date` yet, one is created with every other
    /// cell empty. Dates are matched by value, so different spellings of the
    /// same date address the same row.
    pub fn upsert(
        &mut self,
        date: DateKey,
        column: ColumnIndex,
        value: Option<f64>,
    ) -> Result<(), TableError> {
        self.check(column)?;

        let width = self.columns.len();
        let cells = self.rows.entry(date).or_insert_with(|| {
            trace!(%date, "adding a new row");
            vec![None; width]
        });
        cells[column.index] = value;

        Ok(())
    }

    /// Adds a column named `name` and fills it with `values`.
    ///
    /// Dates without a row get a new one; all other cells of the table stay
    /// untouched.
    pub fn merge_column<I>(
        &mut self,
        name: impl Into<String>,
        values: I,
    ) -> Result<ColumnIndex, TableError>
    where
        I: IntoIterator<Item = (DateKey, Option<f64>)>,
    {
        let column = self.add_column(name);

        for (date, value) in values {
            self.upsert(date, column, value)?;
        }

        Ok(column)
    }

    /// Returns the value at (`date`, `column`); `Ok(None)` for an empty cell
    /// or a missing row.
    pub fn get(&self, date: &DateKey, column: ColumnIndex) -> Result<Option<f64>, TableError> {
        self.check(column)?;

        Ok(self
            .rows
            .get(date)
            .and_then(|cells| cells[column.index]))
    }

    /// Returns the name of the column.
    pub fn column_name(&self, column: ColumnIndex) -> Result<&str, TableError> {
        self.check(column)?;
        Ok(&self.columns[column.index])
    }

    /// The column names, in insertion order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows in ascending date order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|(date, cells)| Row {
            date: *date,
            cells: cells.as_slice(),
        })
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check(&self, column: ColumnIndex) -> Result<(), TableError> {
        if column.table != self.id || column.index >= self.columns.len() {
            return Err(TableError::UnknownColumn { column });
        }

        Ok(())
    }
}

impl Default for SeriesTable {
    fn default() -> Self {
        Self::new()
    }
}
