//! The index of benchmark tests, `test_names.json`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::SeriesError;

/// Directories listed ahead of the others, in this order.
const PINNED_DIRECTORIES: [&str; 2] = ["sql", "sql/parser"];

/// Maps each benchmarked directory to the tests it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TestIndex {
    directories: BTreeMap<String, Vec<String>>,
}

impl TestIndex {
    /// Decodes a `test_names.json` document.
    pub fn from_json(json: &str) -> Result<TestIndex, SeriesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The directory names in listing order: the pinned directories first
    /// (when present), then the rest in ascending order.
    pub fn directories(&self) -> Vec<&str> {
        let pinned = PINNED_DIRECTORIES
            .into_iter()
            .filter(|dir| self.directories.contains_key(*dir));

        let rest = self
            .directories
            .keys()
            .map(String::as_str)
            .filter(|dir| !PINNED_DIRECTORIES.contains(dir));

        pinned.chain(rest).collect()
    }

    /// The sorted test names of `directory`; empty for an unknown directory.
    pub fn tests(&self, directory: &str) -> Vec<&str> {
        let mut tests: Vec<&str> = self
            .directories
            .get(directory)
            .map(|tests| tests.iter().map(String::as_str).collect())
            .unwrap_or_default();

        tests.sort_unstable();
        tests.dedup();
        tests
    }
}
