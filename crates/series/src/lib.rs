//! benchviz's series library.
//!
//! Decodes the benchmark JSON files (test index, per-test histories and
//! per-directory geometric means) and merges date-keyed series into tables
//! with one row per date.

#![warn(missing_docs)]

mod id;

pub mod date;
pub mod error;
pub mod index;
pub mod means;
pub mod metric;
pub mod series;
pub mod table;

pub use crate::date::DateKey;
pub use crate::index::TestIndex;
pub use crate::means::GeometricMean;
pub use crate::means::GeometricMeans;
pub use crate::metric::Metric;
pub use crate::metric::MetricRecord;
pub use crate::series::Series;
pub use crate::table::ColumnIndex;
pub use crate::table::SeriesTable;
