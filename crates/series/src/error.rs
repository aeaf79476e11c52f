//! Defines the error types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::date::DateKey;
use crate::table::ColumnIndex;

/// The error type for parsing and converting [`DateKey`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    /// The text is not made of exactly three `-` separated decimal numbers.
    InvalidFormat {
        /// The text that failed to parse.
        text: String,
    },

    /// The components do not name a calendar date.
    OutOfRange {
        /// The offending key.
        key: DateKey,
    },
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let date_error = "date key error:";

        match self {
            DateKeyError::InvalidFormat { text } => write!(
                f,
                "{date_error} \"{text}\" is not a date in the DD-MM-YYYY format"
            ),
            DateKeyError::OutOfRange { key } => {
                write!(f, "{date_error} {key} is not a calendar date")
            }
        }
    }
}

impl Error for DateKeyError {}

/// The error type for writing into a [`SeriesTable`](crate::table::SeriesTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The column handle was not issued by this table.
    UnknownColumn {
        /// The rejected handle.
        column: ColumnIndex,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TableError::UnknownColumn { column } => write!(
                f,
                "series table error: column {column} was not added to this table"
            ),
        }
    }
}

impl Error for TableError {}

/// The error type for decoding the benchmark JSON files.
#[derive(Debug)]
pub enum SeriesError {
    /// The document is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
}

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Json(error) => write!(f, "series error: malformed JSON: {error}"),
        }
    }
}

impl Error for SeriesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SeriesError::Json(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for SeriesError {
    fn from(error: serde_json::Error) -> Self {
        SeriesError::Json(error)
    }
}
