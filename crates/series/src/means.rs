//! Per-directory geometric means, `geometric_means.json`.

use std::collections::BTreeMap;
use std::error::Error;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::date::DateKey;
use crate::error::SeriesError;
use crate::metric::Metric;

/// The geometric means of all tests of a directory on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricMean {
    /// The date the tests ran on.
    pub date: DateKey,
    time_per_op: Option<f64>,
    allocs_per_op: Option<f64>,
    bytes_per_op: Option<f64>,
    throughput: Option<f64>,
}

impl GeometricMean {
    /// Returns the mean of `metric`, if any.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TimePerOp => self.time_per_op,
            Metric::AllocsPerOp => self.allocs_per_op,
            Metric::BytesPerOp => self.bytes_per_op,
            Metric::Throughput => self.throughput,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGeometricMean {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "NMean", default)]
    n_mean: Option<f64>,
    #[serde(rename = "AMean", default)]
    a_mean: Option<f64>,
    #[serde(rename = "BMean", default)]
    b_mean: Option<f64>,
    #[serde(rename = "MMean", default)]
    m_mean: Option<f64>,
}

impl TryFrom<RawGeometricMean> for GeometricMean {
    type Error = crate::error::DateKeyError;

    fn try_from(raw: RawGeometricMean) -> Result<Self, Self::Error> {
        Ok(Self {
            date: DateKey::parse(&raw.date)?,
            time_per_op: raw.n_mean,
            allocs_per_op: raw.a_mean,
            bytes_per_op: raw.b_mean,
            throughput: raw.m_mean,
        })
    }
}

/// Maps each directory to its geometric means over time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometricMeans {
    directories: BTreeMap<String, Vec<GeometricMean>>,
}

impl GeometricMeans {
    /// Decodes a `geometric_means.json` document.
    ///
    /// Entries with a malformed date or non-numeric means are skipped with a
    /// warning, as are directories that are not lists. The remaining entries
    /// of each directory are sorted by date.
    pub fn from_json(json: &str) -> Result<GeometricMeans, SeriesError> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;

        let directories = raw
            .into_iter()
            .filter_map(|(directory, entries)| {
                let entries = match serde_json::from_value::<Vec<Value>>(entries) {
                    Ok(entries) => entries,
                    Err(error) => {
                        warn!(%directory, %error, "skipping directory of geometric means");
                        return None;
                    }
                };

                let mut means: Vec<GeometricMean> = entries
                    .into_iter()
                    .filter_map(|entry| match decode_mean(entry) {
                        Ok(mean) => Some(mean),
                        Err(error) => {
                            warn!(%directory, %error, "skipping geometric mean");
                            None
                        }
                    })
                    .collect();

                means.sort_by_key(|mean| mean.date);
                Some((directory, means))
            })
            .collect();

        Ok(Self { directories })
    }

    /// The means of `directory` in ascending date order, or `None` if the
    /// directory is not listed.
    pub fn directory(&self, directory: &str) -> Option<&[GeometricMean]> {
        self.directories.get(directory).map(Vec::as_slice)
    }

}

fn decode_mean(entry: Value) -> Result<GeometricMean, Box<dyn Error>> {
    let raw: RawGeometricMean = serde_json::from_value(entry)?;
    Ok(GeometricMean::try_from(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn means_are_sorted_by_date() -> Result<(), SeriesError> {
        let means = GeometricMeans::from_json(
            r#"{
                "sql": [
                    {"Date": "01-03-2021", "NMean": 2.0, "AMean": 4.0, "BMean": 9.0, "MMean": 0},
                    {"Date": "15-01-2021", "NMean": 1.0, "AMean": 3.0, "BMean": 8.0, "MMean": 0}
                ]
            }"#,
        )?;

        let sql = means.directory("sql").unwrap();
        let dates: Vec<String> = sql.iter().map(|m| m.date.to_string()).collect();

        assert_eq!(dates, ["15-01-2021", "01-03-2021"]);
        assert_eq!(sql[0].value(Metric::TimePerOp), Some(1.0));
        assert_eq!(sql[1].value(Metric::BytesPerOp), Some(9.0));
        assert_eq!(sql[1].value(Metric::Throughput), Some(0.0));

        Ok(())
    }

    #[test]
    fn malformed_dates_are_skipped() -> Result<(), SeriesError> {
        let means = GeometricMeans::from_json(
            r#"{"kv": [{"Date": "yesterday", "NMean": 1.0}, {"Date": "1-1-2021"}]}"#,
        )?;

        let kv = means.directory("kv").unwrap();
        assert_eq!(kv.len(), 1);
        assert_eq!(kv[0].value(Metric::AllocsPerOp), None);
        assert!(means.directory("sql").is_none());

        Ok(())
    }

    #[test]
    fn malformed_means_are_skipped() -> Result<(), SeriesError> {
        let means = GeometricMeans::from_json(
            r#"{
                "sql": [
                    {"Date": "15-01-2021", "NMean": 1.5},
                    {"Date": "20-01-2021", "NMean": "n/a"},
                    null
                ],
                "kv": null
            }"#,
        )?;

        let sql = means.directory("sql").unwrap();
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].value(Metric::TimePerOp), Some(1.5));
        assert!(means.directory("kv").is_none());

        Ok(())
    }
}
