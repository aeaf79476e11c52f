use benchviz_vis::chart::axes::RangeMode;
use benchviz_vis::layout::VisLayout;
use benchviz_vis::page::ChartPage;
use benchviz_vis::registry::ChartRegistry;
use tracing::error;
use tracing::warn;

use crate::cli::PathExt;
use crate::cli::PlotArgs;
use crate::error::CliError;
use crate::fetch::SeriesLoader;
use crate::fetch::error::FetchError;

/// Writes the plot page of a test.
///
/// The page is written even when the test cannot be fetched, showing the
/// failure instead of the charts; the command then fails. A comparison that
/// cannot be fetched only adds a notice to the page.
pub(crate) fn plot(loader: &SeriesLoader, args: PlotArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let vis = VisLayout::init(&output_path)?;

    let directory = args.directory.as_deref();
    let test = args.test.as_deref();

    let mut failure: Option<FetchError> = None;
    let mut page = match (directory, test) {
        (Some(directory), Some(test)) => match loader.fetch_series(directory, test) {
            Ok(series) => {
                let registry = ChartRegistry::with_series(test, &series)?;
                ChartPage::plot(Some(directory), Some(test), registry)
            }
            Err(error) => {
                error!(%error, directory, test, "could not fetch the test results");
                let mut page = ChartPage::plot(Some(directory), Some(test), empty_registry());
                page.push_error(format!("Could not load {directory}/{test}: {error}"));
                failure = Some(error);
                page
            }
        },
        _ => {
            warn!("no test selected, writing a blank plot page");
            ChartPage::plot(directory, test, empty_registry())
        }
    };

    for comparison in &args.compare {
        match loader.fetch_series(&comparison.directory, &comparison.test) {
            Ok(series) => page.registry_mut().overlay(&comparison.test, &series)?,
            Err(error) => {
                warn!(%error, %comparison, "could not fetch the comparison");
                page.push_error(format!("Could not compare to {comparison}: {error}"));
            }
        }
    }

    let path = vis.write_charts(&page)?;
    println!("benchviz wrote the plot to: `{}`", path.display());

    match failure {
        Some(error) => Err(CliError::Fetch(error)),
        None => Ok(()),
    }
}

fn empty_registry() -> ChartRegistry {
    ChartRegistry::new(RangeMode::ToZero)
}
