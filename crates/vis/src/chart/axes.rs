//! Chart axes.

use serde::Serialize;

/// The scale of an axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Plain numbers.
    #[default]
    Linear,
    /// Calendar dates.
    Date,
}

/// Where the axis range starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// The range follows the data.
    #[default]
    Normal,
    /// The range always includes zero.
    ToZero,
}

/// A chart axis.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    kind: AxisType,
    #[serde(rename = "rangemode")]
    range_mode: RangeMode,
    #[serde(rename = "showgrid")]
    show_grid: bool,
    #[serde(rename = "zeroline")]
    zero_line: bool,
}

impl Axis {
    /// The x axis of a time series.
    pub fn dates() -> Self {
        Self {
            kind: AxisType::Date,
            range_mode: RangeMode::Normal,
            show_grid: true,
            zero_line: false,
        }
    }

    /// A y axis of plain numbers.
    pub fn values(range_mode: RangeMode) -> Self {
        Self {
            kind: AxisType::Linear,
            range_mode,
            show_grid: true,
            zero_line: range_mode == RangeMode::ToZero,
        }
    }
}
