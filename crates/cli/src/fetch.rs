pub(crate) mod client;
pub(crate) mod error;

use std::path::Path;

use benchviz_series::GeometricMeans;
use benchviz_series::Series;
use benchviz_series::TestIndex;
use benchviz_series::error::SeriesError;
use tracing::debug;
use tracing::info;

use crate::fetch::client::FileSource;
use crate::fetch::client::HttpSource;
use crate::fetch::client::Source;
use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

const TEST_INDEX_FILE_NAME: &str = "test_names.json";
const GEOMETRIC_MEANS_FILE_NAME: &str = "geometric_means.json";

/// Fetches and decodes the benchmark files. Every fetch is a single
/// request with no retry.
pub(crate) struct SeriesLoader {
    source: Box<dyn Source>,
}

impl SeriesLoader {
    pub fn new(source: Box<dyn Source>) -> Self {
        Self { source }
    }

    /// Opens an HTTP source for `http(s)://` locations and a directory
    /// source for anything else.
    pub fn connect(location: &str) -> Result<Self> {
        let source: Box<dyn Source> =
            if location.starts_with("http://") || location.starts_with("https://") {
                Box::new(HttpSource::new(location)?)
            } else {
                Box::new(FileSource::new(Path::new(location))?)
            };

        info!(source = %source.location(), "reading benchmark results");

        Ok(Self::new(source))
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    pub fn fetch_test_index(&self) -> Result<TestIndex> {
        self.fetch(TEST_INDEX_FILE_NAME, TestIndex::from_json)
    }

    pub fn fetch_series(&self, directory: &str, test: &str) -> Result<Series> {
        let resource = format!("{directory}/{test}.json");
        self.fetch(&resource, Series::from_json)
    }

    pub fn fetch_geometric_means(&self) -> Result<GeometricMeans> {
        self.fetch(GEOMETRIC_MEANS_FILE_NAME, GeometricMeans::from_json)
    }

    fn fetch<T, F>(&self, resource: &str, decode: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, SeriesError>,
    {
        debug!(resource, "fetching");

        let content = self.source.get(resource)?;

        decode(&content).map_err(|error| FetchError::Decode {
            resource: resource.to_owned(),
            error,
        })
    }
}
