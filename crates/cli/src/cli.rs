use std::env;
use std::fmt::Display;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Specify where to read the benchmark files from: an `http://` or
    /// `https://` URL, or a local directory.
    #[arg(short, long, global = true, env = "BENCHVIZ_SOURCE", default_value = ".")]
    pub(crate) source: String,

    /// Increase the logging verbosity (-v info, -vv debug, -vvv trace).
    /// The `RUST_LOG` environment variable takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the benchmark tests and write the index page linking to them.
    List(ListArgs),
    /// Chart the history of a benchmark test, optionally compared to others.
    Plot(PlotArgs),
    /// Chart the geometric means of all the tests of a directory.
    Means(MeansArgs),
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct PlotArgs {
    /// The directory of the test.
    #[arg(short, long)]
    pub(crate) directory: Option<String>,

    /// The name of the test.
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Overlay another test on the charts, given as `<directory>:<test>`.
    /// May be repeated.
    #[arg(short, long, value_parser(parse_test_ref))]
    pub(crate) compare: Vec<TestRef>,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct MeansArgs {
    /// The directory whose geometric means are charted.
    #[arg(short, long)]
    pub(crate) directory: String,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

/// A test of a directory, e.g. `sql/parser:BenchmarkParse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestRef {
    pub(crate) directory: String,
    pub(crate) test: String,
}

impl Display for TestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.directory, self.test)
    }
}

fn parse_test_ref(value: &str) -> Result<TestRef, String> {
    match value.split_once(':') {
        Some((directory, test)) if !directory.is_empty() && !test.is_empty() => Ok(TestRef {
            directory: directory.to_owned(),
            test: test.to_owned(),
        }),
        _ => Err(format!(
            "`{value}` must be given as `<directory>:<test>`, e.g. `sql:BenchmarkInsert`."
        )),
    }
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
