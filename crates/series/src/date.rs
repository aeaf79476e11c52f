//! Dates in the `DD-MM-YYYY` form used to key benchmark results.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::DateKeyError;

const DELIMITER: char = '-';

/// A calendar date parsed from its `DD-MM-YYYY` text form.
///
/// The components are compared as numbers, year first, then month, then
/// day, so `9-1-2020` orders before `10-1-2020` and `01-01-2020` equals
/// `1-1-2020`.
// The field order drives the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: u32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Creates a date key from its numeric components.
    pub fn new(day: u32, month: u32, year: u32) -> DateKey {
        Self { year, month, day }
    }

    /// Parses a `DD-MM-YYYY` date.
    ///
    /// The text must split into exactly three non-empty decimal components.
    /// Leading zeros are allowed but not required. The components are not
    /// checked against the calendar; see [`DateKey::to_display_date`].
    pub fn parse(text: &str) -> Result<DateKey, DateKeyError> {
        let mut parts = text.split(DELIMITER);

        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateKeyError::InvalidFormat {
                text: text.to_owned(),
            });
        };

        let component = |part: &str| -> Result<u32, DateKeyError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DateKeyError::InvalidFormat {
                    text: text.to_owned(),
                });
            }

            part.parse().map_err(|_| DateKeyError::InvalidFormat {
                text: text.to_owned(),
            })
        };

        Ok(Self::new(component(day)?, component(month)?, component(year)?))
    }

    /// The day of the month, as written.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The month, 1-based, as written.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year, as written.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Converts the key into a calendar date for the chart renderer.
    ///
    /// Fails when the components do not name a real date, e.g. `31-02-2021`.
    pub fn to_display_date(&self) -> Result<NaiveDate, DateKeyError> {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .ok_or(DateKeyError::OutOfRange { key: *self })
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateKey::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> DateKey {
        DateKey::parse(text).unwrap()
    }

    #[test]
    fn parse_reads_day_month_year() {
        let date = key("15-01-2021");

        assert_eq!(date.day(), 15);
        assert_eq!(date.month(), 1);
        assert_eq!(date.year(), 2021);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in [
            "",
            "15-01",
            "15-01-2021-3",
            "15/01/2021",
            "a-01-2021",
            "15--2021",
            "+5-01-2021",
            " 5-01-2021",
            "99999999999-01-2021",
        ] {
            assert!(
                matches!(
                    DateKey::parse(text),
                    Err(DateKeyError::InvalidFormat { .. })
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn compare_is_numeric_not_lexicographic() {
        assert!(key("9-1-2020") < key("10-1-2020"));
        assert!(key("31-12-2019") < key("1-1-2020"));
        assert!(key("1-2-2020") > key("28-1-2020"));
    }

    #[test]
    fn leading_zeros_do_not_affect_equality() {
        assert_eq!(key("01-01-2020"), key("1-1-2020"));
        assert_eq!(key("01-01-2020").cmp(&key("1-1-2020")), std::cmp::Ordering::Equal);
    }

    #[test]
    fn sorting_is_chronological_and_idempotent() {
        let mut dates: Vec<DateKey> = ["01-03-2021", "15-01-2021", "9-1-2020", "10-1-2020"]
            .into_iter()
            .map(key)
            .collect();

        dates.sort();
        let sorted = dates.clone();
        dates.sort();

        assert_eq!(dates, sorted);
        assert_eq!(
            dates.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["09-01-2020", "10-01-2020", "15-01-2021", "01-03-2021"]
        );
    }

    #[test]
    fn to_display_date_rejects_impossible_dates() {
        assert_eq!(
            key("20-01-2021").to_display_date().unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 20).unwrap()
        );
        assert!(matches!(
            key("31-02-2021").to_display_date(),
            Err(DateKeyError::OutOfRange { .. })
        ));
        assert!(key("1-13-2021").to_display_date().is_err());
    }

    #[test]
    fn serde_uses_text_form() {
        let json = serde_json::to_string(&key("1-2-2021")).unwrap();
        assert_eq!(json, "\"01-02-2021\"");

        let date: DateKey = serde_json::from_str("\"1-2-2021\"").unwrap();
        assert_eq!(date, key("01-02-2021"));

        assert!(serde_json::from_str::<DateKey>("\"2021-02-01-0\"").is_err());
    }
}
