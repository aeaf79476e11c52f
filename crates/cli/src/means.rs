use benchviz_vis::layout::VisLayout;
use benchviz_vis::page::ChartPage;
use tracing::error;
use tracing::warn;

use crate::cli::MeansArgs;
use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::SeriesLoader;

pub(crate) fn means(loader: &SeriesLoader, args: MeansArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let vis = VisLayout::init(&output_path)?;
    let directory = args.directory.as_str();

    let (page, failure) = match loader.fetch_geometric_means() {
        Ok(means) => {
            let entries = means.directory(directory).unwrap_or_default();
            let mut page = ChartPage::means(directory, entries)?;

            if entries.is_empty() {
                warn!(directory, "no geometric means for the directory");
                page.push_error(format!("There are no geometric means for {directory}."));
            }

            (page, None)
        }
        Err(error) => {
            error!(%error, directory, "could not fetch the geometric means");
            let mut page = ChartPage::means(directory, &[])?;
            page.push_error(format!("Could not load the geometric means: {error}"));
            (page, Some(error))
        }
    };

    let path = vis.write_charts(&page)?;
    println!("benchviz wrote the geometric means to: `{}`", path.display());

    match failure {
        Some(error) => Err(CliError::Fetch(error)),
        None => Ok(()),
    }
}
