//! The output directory of the visualization.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use benchviz_series::TestIndex;
use tracing::info;

use crate::error::Result;
use crate::page::ChartPage;
use crate::page::IndexContext;
use crate::template::CHARTS_TEMPLATE;
use crate::template::INDEX_TEMPLATE;
use crate::template::TemplateEngine;

/// The visualization directory is structured as follows:
///
/// ./vis/index.html
/// ./vis/plot-<directory>-<test>.html
/// ./vis/means-<directory>.html
///
/// The __index__ file lists every test, grouped by directory, and links to
/// the plot pages. A __plot__ page draws the four metrics of a test and any
/// comparison overlaid on it. A __means__ page draws the geometric means of
/// all the tests of a directory.
pub struct VisLayout {
    root_path: PathBuf,
    templates: TemplateEngine,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Prepares the `vis` directory under `path`, creating it when missing.
    pub fn init(path: &Path) -> Result<VisLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        fs::create_dir_all(&root_path)?;

        Ok(Self {
            root_path,
            templates: TemplateEngine::new()?,
        })
    }

    /// The directory the pages are written to.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Writes the test list and returns its path.
    pub fn write_index(&self, index: &TestIndex) -> Result<PathBuf> {
        let path = self.root_path.join(Self::INDEX_FILE_NAME);
        let context = IndexContext::new(index);

        self.templates
            .render_to_file(INDEX_TEMPLATE, &context, &path)?;
        info!(path = %path.display(), "wrote the test index");

        Ok(path)
    }

    /// Writes a page of charts and returns its path.
    pub fn write_charts(&self, page: &ChartPage) -> Result<PathBuf> {
        let path = self.root_path.join(page.file_name());
        let context = page.context()?;

        self.templates
            .render_to_file(CHARTS_TEMPLATE, &context, &path)?;
        info!(path = %path.display(), errors = page.errors().len(), "wrote the charts");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use benchviz_series::GeometricMeans;
    use benchviz_series::Series;

    use super::*;
    use crate::registry::ChartRegistry;

    #[test]
    fn write_index_lists_tests() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;
        let index = TestIndex::from_json(
            r#"{"kv": ["BenchmarkScan"], "sql": ["BenchmarkUpdate", "BenchmarkInsert"]}"#,
        )
        .unwrap();

        let path = layout.write_index(&index)?;
        let html = fs::read_to_string(path)?;

        let insert = html.find("BenchmarkInsert").unwrap();
        let update = html.find("BenchmarkUpdate").unwrap();
        let scan = html.find("BenchmarkScan").unwrap();
        assert!(insert < update && update < scan);
        assert!(html.contains(r#"href="plot-sql-BenchmarkInsert.html""#));

        Ok(())
    }

    #[test]
    fn write_charts_draws_every_panel() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;
        let series = Series::from_json(
            r#"{"01-03-2021": {"N": 2}, "15-01-2021": {"N": 1}}"#,
        )
        .unwrap();
        let registry = ChartRegistry::with_series("BenchmarkInsert", &series)?;
        let page = ChartPage::plot(Some("sql"), Some("BenchmarkInsert"), registry);

        let path = layout.write_charts(&page)?;
        let html = fs::read_to_string(&path)?;

        assert_eq!(path.file_name().unwrap(), "plot-sql-BenchmarkInsert.html");
        for id in ["NPlot", "APlot", "BPlot", "MPlot"] {
            assert!(html.contains(&format!(r#"<div id="{id}"></div>"#)));
        }
        let first = html.find("2021-01-15").unwrap();
        let second = html.find("2021-03-01").unwrap();
        assert!(first < second);
        assert!(!html.contains(r#"class="errors""#));

        Ok(())
    }

    #[test]
    fn write_charts_shows_errors() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let layout = VisLayout::init(dir.path())?;
        let means = GeometricMeans::from_json(r#"{"sql": []}"#).unwrap();
        let mut page = ChartPage::means("sql", means.directory("sql").unwrap())?;
        page.push_error("could not fetch <geometric_means.json>");

        let html = fs::read_to_string(layout.write_charts(&page)?)?;

        assert!(html.contains(r#"class="errors""#));
        assert!(html.contains("could not fetch &lt;geometric_means.json&gt;"));

        Ok(())
    }

    #[test]
    fn init_reuses_an_existing_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;

        VisLayout::init(dir.path())?;
        let layout = VisLayout::init(dir.path())?;

        assert!(layout.root_path().is_dir());

        Ok(())
    }
}
