use benchviz_vis::layout::VisLayout;
use tracing::error;

use crate::cli::ListArgs;
use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::SeriesLoader;

pub(crate) fn list(loader: &SeriesLoader, args: ListArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;

    let index = loader.fetch_test_index().inspect_err(|error| {
        error!(%error, source = %loader.location(), "could not fetch the test index");
    })?;

    for directory in index.directories() {
        println!("{directory}");
        for test in index.tests(directory) {
            println!("  {test}");
        }
    }

    let vis = VisLayout::init(&output_path)?;
    let path = vis.write_index(&index)?;

    println!("benchviz wrote the test index to: `{}`", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn list_writes_the_index_page() -> Result<(), Box<dyn std::error::Error>> {
        let source = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        fs::write(
            source.path().join("test_names.json"),
            r#"{"sql": ["BenchmarkInsert"], "kv": ["BenchmarkScan"]}"#,
        )?;

        let loader = SeriesLoader::connect(source.path().to_str().unwrap())?;
        list(
            &loader,
            ListArgs {
                output_path: Some(output.path().to_path_buf()),
            },
        )?;

        let html = fs::read_to_string(output.path().join("vis").join("index.html"))?;
        assert!(html.contains("plot-sql-BenchmarkInsert.html"));
        assert!(html.contains("plot-kv-BenchmarkScan.html"));

        Ok(())
    }

    #[test]
    fn list_fails_without_an_index() -> Result<(), Box<dyn std::error::Error>> {
        let source = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;

        let loader = SeriesLoader::connect(source.path().to_str().unwrap())?;
        let result = list(
            &loader,
            ListArgs {
                output_path: Some(output.path().to_path_buf()),
            },
        );

        assert!(matches!(result, Err(CliError::Fetch(_))));
        assert!(!output.path().join("vis").join("index.html").exists());

        Ok(())
    }
}
