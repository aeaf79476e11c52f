//! The pages of the visualization and their template contexts.

use benchviz_series::GeometricMean;
use benchviz_series::TestIndex;
use serde::Serialize;

use crate::chart::trace::Layout;
use crate::error::Result;
use crate::registry::ChartRegistry;

/// The file name of the plot page of `test` in `directory`.
///
/// Distinct (directory, test) pairs always get distinct names.
pub fn plot_file_name(directory: &str, test: &str) -> String {
    format!("plot-{}-{}.html", escape(directory), escape(test))
}

/// The file name of the geometric means page of `directory`.
pub fn means_file_name(directory: &str) -> String {
    format!("means-{}.html", escape(directory))
}

/// Keeps ASCII letters, digits and `.`, and writes every other byte as `_`
/// followed by two hex digits. The result never contains `-`.
fn escape(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());

    for byte in name.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' => escaped.push(char::from(byte)),
            _ => escaped.push_str(&format!("_{byte:02X}")),
        }
    }

    escaped
}

/// A page of four metric charts with optional error notices.
///
/// A page whose data could not be fetched is still written: it shows the
/// error in place of the charts.
#[derive(Debug)]
pub struct ChartPage {
    heading: String,
    file_name: String,
    registry: ChartRegistry,
    errors: Vec<String>,
}

impl ChartPage {
    /// The plot page of `test` in `directory`. Missing names are shown blank.
    pub fn plot(directory: Option<&str>, test: Option<&str>, registry: ChartRegistry) -> ChartPage {
        let directory = directory.unwrap_or_default();
        let test = test.unwrap_or_default();

        Self {
            heading: test.to_owned(),
            file_name: plot_file_name(directory, test),
            registry,
            errors: Vec::new(),
        }
    }

    /// The geometric means page of `directory`.
    pub fn means(directory: &str, means: &[GeometricMean]) -> Result<ChartPage> {
        Ok(Self {
            heading: directory.to_owned(),
            file_name: means_file_name(directory),
            registry: ChartRegistry::with_means(directory, means)?,
            errors: Vec::new(),
        })
    }

    /// Adds an error notice shown above the charts.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Mutable access to the chart panels, for overlays.
    pub fn registry_mut(&mut self) -> &mut ChartRegistry {
        &mut self.registry
    }

    /// The error notices of the page.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The name of the file the page is written to.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn context(&self) -> Result<ChartsContext> {
        let charts = self
            .registry
            .panels()
            .map(|panel| {
                let traces = panel.chart_table().traces();
                let layout = Layout::new(panel.title(), panel.range_mode());

                Ok(ChartContext {
                    id: panel.id(),
                    traces: script_json(&traces)?,
                    layout: script_json(&layout)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChartsContext {
            heading: self.heading.clone(),
            has_errors: !self.errors.is_empty(),
            errors: self.errors.clone(),
            charts,
        })
    }
}

/// Serializes `value` for embedding inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[derive(Serialize, Debug)]
pub(crate) struct ChartsContext {
    heading: String,
    has_errors: bool,
    errors: Vec<String>,
    charts: Vec<ChartContext>,
}

#[derive(Serialize, Debug)]
struct ChartContext {
    id: &'static str,
    traces: String,
    layout: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct IndexContext {
    directories: Vec<DirectoryContext>,
}

#[derive(Serialize, Debug)]
struct DirectoryContext {
    name: String,
    means_page: String,
    tests: Vec<TestContext>,
}

#[derive(Serialize, Debug)]
struct TestContext {
    name: String,
    page: String,
}

impl IndexContext {
    pub(crate) fn new(index: &TestIndex) -> IndexContext {
        let directories = index
            .directories()
            .into_iter()
            .map(|directory| DirectoryContext {
                name: directory.to_owned(),
                means_page: means_file_name(directory),
                tests: index
                    .tests(directory)
                    .into_iter()
                    .map(|test| TestContext {
                        name: test.to_owned(),
                        page: plot_file_name(directory, test),
                    })
                    .collect(),
            })
            .collect();

        Self { directories }
    }
}

#[cfg(test)]
mod tests {
    use benchviz_series::Series;

    use super::*;

    #[test]
    fn file_names_are_flat() {
        assert_eq!(
            plot_file_name("sql/parser", "BenchmarkParse/select"),
            "plot-sql_2Fparser-BenchmarkParse_2Fselect.html"
        );
        assert_eq!(plot_file_name("sql", "BenchmarkInsert"), "plot-sql-BenchmarkInsert.html");
        assert_eq!(means_file_name("sql"), "means-sql.html");
        assert_eq!(plot_file_name("", ""), "plot--.html");
    }

    #[test]
    fn file_names_do_not_collide() {
        assert_ne!(plot_file_name("a-b", "c"), plot_file_name("a", "b-c"));
        assert_ne!(
            plot_file_name("sql/parser", "X"),
            plot_file_name("sql_parser", "X")
        );
        assert_ne!(plot_file_name("a_2F", "b"), plot_file_name("a/", "b"));
        assert_ne!(means_file_name("sql/parser"), means_file_name("sql_parser"));
    }

    #[test]
    fn chart_context_escapes_script_end_tags() -> Result<()> {
        let series = Series::from_json(r#"{"10-01-2021": {"N": 1}}"#).unwrap();
        let registry = ChartRegistry::with_series("</script><b>", &series)?;
        let page = ChartPage::plot(Some("sql"), Some("</script><b>"), registry);

        let context = page.context()?;

        assert_eq!(context.charts.len(), 4);
        assert!(!context.charts[0].traces.contains("</script>"));
        assert!(!context.has_errors);

        Ok(())
    }

    #[test]
    fn index_context_links_plot_pages() {
        let index =
            TestIndex::from_json(r#"{"kv": ["BenchmarkScan"], "sql": ["BenchmarkInsert"]}"#)
                .unwrap();

        let context = IndexContext::new(&index);

        assert_eq!(context.directories[0].name, "sql");
        assert_eq!(
            context.directories[0].tests[0].page,
            "plot-sql-BenchmarkInsert.html"
        );
        assert_eq!(context.directories[1].means_page, "means-kv.html");
    }
}
