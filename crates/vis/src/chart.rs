//! The drawable form of a [`SeriesTable`].

pub mod axes;
pub mod trace;

use benchviz_series::ColumnIndex;
use benchviz_series::Metric;
use benchviz_series::Series;
use benchviz_series::SeriesTable;
use chrono::NaiveDate;
use tracing::warn;

use crate::chart::trace::Trace;
use crate::error::Result;

/// The value type of a [`ChartTable`] column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Calendar dates; always the first column.
    Date,
    /// Numbers, with empty cells allowed.
    Number,
}

/// A labelled column of a [`ChartTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The label shown in the legend.
    pub label: String,
    /// The value type.
    pub kind: ColumnKind,
}

/// A row of a [`ChartTable`]: a date and one cell per numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// The x value.
    pub date: NaiveDate,
    /// The y values, in numeric column order.
    pub cells: Vec<Option<f64>>,
}

/// A generic row/column table as consumed by a line chart: a date column
/// followed by one numeric column per series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    columns: Vec<Column>,
    rows: Vec<ChartRow>,
}

impl ChartTable {
    /// The columns, the date column first.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows in ascending date order.
    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    /// One line trace per numeric column.
    pub fn traces(&self) -> Vec<Trace> {
        let xs: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.date.format("%Y-%m-%d").to_string())
            .collect();

        self.columns
            .iter()
            .filter(|column| column.kind == ColumnKind::Number)
            .enumerate()
            .map(|(idx, column)| {
                let ys = self.rows.iter().map(|row| row.cells[idx]).collect();
                Trace::line(column.label.clone(), xs.clone(), ys)
            })
            .collect()
    }
}

/// Builds the drawable table of `table`.
///
/// Rows whose date is not a calendar date are left out with a warning.
pub fn build_table(table: &SeriesTable) -> ChartTable {
    let mut columns = Vec::with_capacity(table.columns().len() + 1);
    columns.push(Column {
        label: String::from("Date"),
        kind: ColumnKind::Date,
    });
    columns.extend(table.columns().iter().map(|name| Column {
        label: name.clone(),
        kind: ColumnKind::Number,
    }));

    let rows = table
        .rows()
        .filter_map(|row| match row.date.to_display_date() {
            Ok(date) => Some(ChartRow {
                date,
                cells: row.cells.to_vec(),
            }),
            Err(error) => {
                warn!(%error, "leaving the row out of the chart");
                None
            }
        })
        .collect();

    ChartTable { columns, rows }
}

/// Adds `series` as a new column named `name`, aligned by date with the
/// series already in `table`.
///
/// Rows and columns already in the table are left untouched; dates the
/// table did not have yet get a new row with only the new cell set.
pub fn overlay(
    table: &mut SeriesTable,
    series: &Series,
    metric: Metric,
    name: &str,
) -> Result<ColumnIndex> {
    Ok(table.merge_column(name, series.values(metric))?)
}
