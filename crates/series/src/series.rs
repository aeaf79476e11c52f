//! Per-test benchmark histories.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use tracing::debug;
use tracing::warn;

use crate::date::DateKey;
use crate::error::SeriesError;
use crate::metric::Metric;
use crate::metric::MetricRecord;

/// The history of a single benchmark test, ordered by date.
///
/// Decoded from a `<directory>/<test>.json` file, which maps `DD-MM-YYYY`
/// dates to the measurements taken on that date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    records: BTreeMap<DateKey, MetricRecord>,
}

impl Series {
    /// Decodes a per-test JSON document.
    ///
    /// Entries whose date does not parse, and records that are not objects of
    /// numbers, are skipped with a warning. When two spellings of the same
    /// date are present, the one that comes later in the document wins.
    pub fn from_json(json: &str) -> Result<Series, SeriesError> {
        let Entries(entries) = serde_json::from_str(json)?;

        Ok(entries
            .into_iter()
            .filter_map(
                |(text, value)| match serde_json::from_value::<MetricRecord>(value) {
                    Ok(record) => Some((text, record)),
                    Err(error) => {
                        warn!(date = %text, %error, "skipping benchmark record");
                        None
                    }
                },
            )
            .collect())
    }

    /// The records in ascending date order.
    pub fn records(&self) -> impl Iterator<Item = (&DateKey, &MetricRecord)> {
        self.records.iter()
    }

    /// The values of one metric in ascending date order.
    pub fn values(&self, metric: Metric) -> impl Iterator<Item = (DateKey, Option<f64>)> + '_ {
        self.records
            .iter()
            .map(move |(date, record)| (*date, record.value(metric)))
    }

    /// The number of dates in the series.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the series has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(DateKey, MetricRecord)> for Series {
    fn from_iter<T: IntoIterator<Item = (DateKey, MetricRecord)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, MetricRecord)> for Series {
    fn from_iter<T: IntoIterator<Item = (String, MetricRecord)>>(iter: T) -> Self {
        let mut records = BTreeMap::new();

        for (text, record) in iter {
            let date = match DateKey::parse(&text) {
                Ok(date) => date,
                Err(error) => {
                    warn!(%error, "skipping benchmark record");
                    continue;
                }
            };

            match records.entry(date) {
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
                Entry::Occupied(mut entry) => {
                    debug!(%date, spelling = %text, "duplicate date in series");
                    entry.insert(record);
                }
            }
        }

        Self { records }
    }
}

/// The members of a JSON object in document order.
struct Entries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object keyed by DD-MM-YYYY dates")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Entries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
