//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use benchviz_series::error::TableError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for charting benchmark series and writing the pages
/// that draw them.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while writing the pages.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// a template file.
    Template(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing chart traces.
    Json(serde_json::Error),

    /// A [TableError] encountered while merging a series into a chart.
    Table(TableError),
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::Template(error) => Some(error),
            VisError::Json(error) => Some(error),
            VisError::Table(error) => Some(error),
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::Template(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} chart serialization error: {error}"),
            VisError::Table(error) => write!(f, "{vis_error} {error}"),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::Template(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<serde_json::Error> for VisError {
    fn from(error: serde_json::Error) -> Self {
        VisError::Json(error)
    }
}

impl From<TableError> for VisError {
    fn from(error: TableError) -> Self {
        VisError::Table(error)
    }
}

#[cfg(test)]
mod tests {
    use benchviz_series::DateKey;
    use benchviz_series::SeriesTable;

    use super::*;

    fn fill(table: &mut SeriesTable, other: &mut SeriesTable) -> Result<()> {
        let foreign = other.add_column("other");
        table.upsert(DateKey::new(10, 1, 2021), foreign, Some(1.0))?;
        Ok(())
    }

    #[test]
    fn table_errors_surface_as_vis_errors() {
        let mut table = SeriesTable::new();
        table.add_column("mine");

        let error = fill(&mut table, &mut SeriesTable::new()).unwrap_err();

        assert!(matches!(
            error,
            VisError::Table(TableError::UnknownColumn { .. })
        ));
        assert!(error.to_string().starts_with("vis error:"));
        assert!(error.source().is_some());
    }
}
