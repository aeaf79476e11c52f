//! The chart panels of a page, one per metric.

use std::collections::BTreeMap;

use benchviz_series::GeometricMean;
use benchviz_series::Metric;
use benchviz_series::Series;
use benchviz_series::SeriesTable;
use tracing::debug;

use crate::chart;
use crate::chart::ChartTable;
use crate::chart::axes::RangeMode;
use crate::error::Result;

/// A chart drawing one metric of one or more series.
#[derive(Debug)]
pub struct ChartPanel {
    metric: Metric,
    table: SeriesTable,
    range_mode: RangeMode,
}

impl ChartPanel {
    fn new(metric: Metric, range_mode: RangeMode) -> Self {
        Self {
            metric,
            table: SeriesTable::new(),
            range_mode,
        }
    }

    /// The element id of the panel on the page.
    pub fn id(&self) -> &'static str {
        self.metric.panel_id()
    }

    /// The chart title.
    pub fn title(&self) -> &'static str {
        self.metric.title()
    }

    /// The merged series of this panel.
    pub fn table(&self) -> &SeriesTable {
        &self.table
    }

    /// Where the y axis starts.
    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    /// The drawable table of this panel.
    pub fn chart_table(&self) -> ChartTable {
        chart::build_table(&self.table)
    }
}

/// Owns the live chart panels of a page, keyed by metric.
///
/// Every function that adds series to the charts receives the registry
/// explicitly.
#[derive(Debug)]
pub struct ChartRegistry {
    panels: BTreeMap<Metric, ChartPanel>,
}

impl ChartRegistry {
    /// Creates a registry with an empty panel per metric.
    pub fn new(range_mode: RangeMode) -> ChartRegistry {
        let panels = Metric::ALL
            .into_iter()
            .map(|metric| (metric, ChartPanel::new(metric, range_mode)))
            .collect();

        Self { panels }
    }

    /// Creates the panels of a test's plot page, drawing `series` under
    /// the name `test`.
    pub fn with_series(test: &str, series: &Series) -> Result<ChartRegistry> {
        let mut registry = Self::new(RangeMode::ToZero);
        registry.overlay(test, series)?;
        Ok(registry)
    }

    /// Creates the panels of a directory's geometric means page.
    pub fn with_means(directory: &str, means: &[GeometricMean]) -> Result<ChartRegistry> {
        let mut registry = Self::new(RangeMode::Normal);

        for panel in registry.panels.values_mut() {
            let metric = panel.metric;
            panel
                .table
                .merge_column(directory, means.iter().map(|mean| (mean.date, mean.value(metric))))?;
        }

        Ok(registry)
    }

    /// Adds `series` as the column `name` to every panel, aligned by date
    /// with the series already drawn.
    pub fn overlay(&mut self, name: &str, series: &Series) -> Result<()> {
        debug!(name, dates = series.len(), "overlaying series");

        for panel in self.panels.values_mut() {
            chart::overlay(&mut panel.table, series, panel.metric, name)?;
        }

        Ok(())
    }

    /// Returns the panel drawing `metric`.
    pub fn panel(&self, metric: Metric) -> Option<&ChartPanel> {
        self.panels.get(&metric)
    }

    /// The panels in metric order.
    pub fn panels(&self) -> impl Iterator<Item = &ChartPanel> {
        self.panels.values()
    }
}

#[cfg(test)]
mod tests {
    use benchviz_series::DateKey;
    use benchviz_series::GeometricMeans;

    use super::*;

    #[test]
    fn panels_are_in_metric_order() {
        let registry = ChartRegistry::new(RangeMode::ToZero);
        let ids: Vec<&str> = registry.panels().map(ChartPanel::id).collect();

        assert_eq!(ids, ["NPlot", "APlot", "BPlot", "MPlot"]);
    }

    #[test]
    fn overlay_adds_a_column_to_every_panel() -> Result<()> {
        let primary = Series::from_json(
            r#"{"10-01-2021": {"N": 1, "A": 10}, "20-01-2021": {"N": 2, "A": 20}}"#,
        )
        .unwrap();
        let comparison = Series::from_json(
            r#"{"15-01-2021": {"N": 3, "A": 30}, "20-01-2021": {"N": 4}}"#,
        )
        .unwrap();

        let mut registry = ChartRegistry::with_series("BenchmarkInsert", &primary)?;
        registry.overlay("BenchmarkUpdate", &comparison)?;

        for panel in registry.panels() {
            assert_eq!(panel.table().columns(), ["BenchmarkInsert", "BenchmarkUpdate"]);
            assert_eq!(panel.table().len(), 3);
        }

        let allocs = registry.panel(Metric::AllocsPerOp).unwrap().table();
        let cells: Vec<Vec<Option<f64>>> = allocs.rows().map(|row| row.cells.to_vec()).collect();
        assert_eq!(
            cells,
            vec![
                vec![Some(10.0), None],
                vec![None, Some(30.0)],
                vec![Some(20.0), None],
            ]
        );

        Ok(())
    }

    #[test]
    fn means_panels_have_one_column() -> Result<()> {
        let means = GeometricMeans::from_json(
            r#"{"sql": [
                {"Date": "01-03-2021", "NMean": 2.0},
                {"Date": "15-01-2021", "NMean": 1.0}
            ]}"#,
        )
        .unwrap();

        let registry = ChartRegistry::with_means("sql", means.directory("sql").unwrap())?;
        let panel = registry.panel(Metric::TimePerOp).unwrap();

        assert_eq!(panel.table().columns(), ["sql"]);
        assert_eq!(panel.range_mode(), RangeMode::Normal);
        let first = panel.table().rows().next().unwrap();
        assert_eq!(first.date, DateKey::parse("15-01-2021").unwrap());
        assert_eq!(first.cells, &[Some(1.0)]);

        Ok(())
    }
}
