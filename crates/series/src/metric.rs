//! The benchmark metrics recorded for each test run.

use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

/// One of the four measurements reported by a benchmark run with memory
/// statistics enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Nanoseconds per operation (`N`).
    TimePerOp,
    /// Heap allocations per operation (`A`).
    AllocsPerOp,
    /// Bytes allocated per operation (`B`).
    BytesPerOp,
    /// Megabytes processed per second (`M`).
    Throughput,
}

impl Metric {
    /// All metrics in chart order.
    pub const ALL: [Metric; 4] = [
        Metric::TimePerOp,
        Metric::AllocsPerOp,
        Metric::BytesPerOp,
        Metric::Throughput,
    ];

    /// The field name used in the per-test JSON files.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::TimePerOp => "N",
            Metric::AllocsPerOp => "A",
            Metric::BytesPerOp => "B",
            Metric::Throughput => "M",
        }
    }

    /// The unit shown as the chart title.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::TimePerOp => "ns/op",
            Metric::AllocsPerOp => "allocs/op",
            Metric::BytesPerOp => "B/op",
            Metric::Throughput => "MB/s",
        }
    }

    /// The identifier of the chart panel that draws this metric.
    pub fn panel_id(&self) -> &'static str {
        match self {
            Metric::TimePerOp => "NPlot",
            Metric::AllocsPerOp => "APlot",
            Metric::BytesPerOp => "BPlot",
            Metric::Throughput => "MPlot",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// The measurements of one test on one date.
///
/// Missing and `null` fields both decode to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Nanoseconds per operation.
    #[serde(rename = "N", default)]
    pub time_per_op: Option<f64>,
    /// Allocations per operation.
    #[serde(rename = "A", default)]
    pub allocs_per_op: Option<f64>,
    /// Bytes per operation.
    #[serde(rename = "B", default)]
    pub bytes_per_op: Option<f64>,
    /// Megabytes per second.
    #[serde(rename = "M", default)]
    pub throughput: Option<f64>,
}

impl MetricRecord {
    /// Returns the value recorded for `metric`, if any.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::TimePerOp => self.time_per_op,
            Metric::AllocsPerOp => self.allocs_per_op,
            Metric::BytesPerOp => self.bytes_per_op,
            Metric::Throughput => self.throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_record_with_missing_and_null_fields() {
        let record: MetricRecord =
            serde_json::from_str(r#"{"N": 1328086, "A": 2317, "B": null}"#).unwrap();

        assert_eq!(record.value(Metric::TimePerOp), Some(1328086.0));
        assert_eq!(record.value(Metric::AllocsPerOp), Some(2317.0));
        assert_eq!(record.value(Metric::BytesPerOp), None);
        assert_eq!(record.value(Metric::Throughput), None);
    }

    #[test]
    fn metric_keys_match_record_fields() {
        let record = MetricRecord {
            time_per_op: Some(1.0),
            allocs_per_op: Some(2.0),
            bytes_per_op: Some(3.0),
            throughput: Some(4.5),
        };
        let json = serde_json::to_value(record).unwrap();

        for metric in Metric::ALL {
            assert_eq!(json[metric.key()].as_f64(), record.value(metric));
        }
    }
}
