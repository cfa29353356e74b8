//! Weekly opening-hours tables.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The seven lowercase weekday names a complete hours table must carry,
/// in calendar order.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// A store's weekly hours table.
///
/// Maps lowercase weekday names to either [`WeeklyHours::CLOSED`] or a
/// display string of the form `"10:00 AM - 8:00 PM"` (12-hour clock,
/// open and close separated by `" - "`). Entries are kept as raw strings:
/// the table is reference data, and the engine's hours resolver parses
/// entries on demand, treating anything unparseable as closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeeklyHours(BTreeMap<String, String>);

impl WeeklyHours {
    /// Sentinel entry value for a day the store does not open.
    pub const CLOSED: &'static str = "Closed";

    /// Create a table from raw day-name/entry pairs.
    #[must_use]
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    /// Returns the lowercase name used as the table key for `weekday`.
    #[must_use]
    pub const fn day_name(weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    /// Returns the raw entry for `weekday`, if the table has one.
    #[must_use]
    pub fn entry_for(&self, weekday: Weekday) -> Option<&str> {
        self.0.get(Self::day_name(weekday)).map(String::as_str)
    }

    /// Returns `true` if all seven weekday entries are present.
    #[must_use]
    pub fn has_all_days(&self) -> bool {
        self.missing_days().is_empty()
    }

    /// Returns the weekday names absent from the table, in calendar order.
    #[must_use]
    pub fn missing_days(&self) -> Vec<&'static str> {
        WEEKDAY_NAMES
            .iter()
            .filter(|day| !self.0.contains_key(**day))
            .copied()
            .collect()
    }

    /// Iterate over the raw day-name/entry pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for WeeklyHours
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
