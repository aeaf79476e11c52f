//! Plotly trace and layout specs.

use serde::Serialize;

use crate::chart::axes::Axis;
use crate::chart::axes::RangeMode;

const WIDTH: u32 = 900;
const HEIGHT: u32 = 450;

/// A line trace: one series drawn against dates.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    mode: Mode,
    /// The legend label.
    pub name: String,
    /// ISO 8601 dates.
    pub x: Vec<String>,
    /// Values; `None` serializes to `null` and leaves a gap.
    pub y: Vec<Option<f64>>,
    line: Line,
    #[serde(rename = "connectgaps")]
    connect_gaps: bool,
}

impl Trace {
    /// Creates a smoothed line trace.
    pub fn line(name: String, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self {
            kind: TraceKind::Scatter,
            mode: Mode::LinesMarkers,
            name,
            x,
            y,
            line: Line {
                shape: LineShape::Spline,
            },
            connect_gaps: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TraceKind {
    Scatter,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
struct Line {
    shape: LineShape,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum LineShape {
    Spline,
}

/// The layout of a chart: title, axes and a legend below the plot.
#[derive(Serialize, Debug, Clone)]
pub struct Layout {
    title: Title,
    #[serde(rename = "xaxis")]
    x_axis: Axis,
    #[serde(rename = "yaxis")]
    y_axis: Axis,
    width: u32,
    height: u32,
    #[serde(rename = "showlegend")]
    show_legend: bool,
    legend: Legend,
    #[serde(rename = "hovermode")]
    hover_mode: HoverMode,
}

impl Layout {
    /// Creates the layout of a chart titled `title`.
    pub fn new(title: &str, range_mode: RangeMode) -> Self {
        Self {
            title: Title {
                text: title.to_owned(),
            },
            x_axis: Axis::dates(),
            y_axis: Axis::values(range_mode),
            width: WIDTH,
            height: HEIGHT,
            show_legend: true,
            legend: Legend {
                orientation: Orientation::Horizontal,
            },
            hover_mode: HoverMode::Closest,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
struct Title {
    text: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
struct Legend {
    orientation: Orientation,
}

#[derive(Serialize, Debug, Clone, Copy)]
enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum HoverMode {
    Closest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_serialize_as_null() -> Result<(), serde_json::Error> {
        let trace = Trace::line(
            String::from("BenchmarkInsert"),
            vec![String::from("2021-01-10"), String::from("2021-01-15")],
            vec![Some(1.5), None],
        );

        let json = serde_json::to_value(&trace)?;

        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "lines+markers");
        assert_eq!(json["line"]["shape"], "spline");
        assert_eq!(json["y"], serde_json::json!([1.5, null]));

        Ok(())
    }

    #[test]
    fn layout_starts_values_at_zero_when_asked() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(Layout::new("ns/op", RangeMode::ToZero))?;

        assert_eq!(json["title"]["text"], "ns/op");
        assert_eq!(json["xaxis"]["type"], "date");
        assert_eq!(json["yaxis"]["rangemode"], "tozero");
        assert_eq!(json["legend"]["orientation"], "h");

        Ok(())
    }
}
