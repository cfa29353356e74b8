//! Open-status resolution against weekly hours tables.
//!
//! Hours entries are display strings like `"10:00 AM - 7:00 PM"`. The
//! resolver parses them on demand and compares against the caller's
//! clock; it never throws. "We can't tell whether it's open" resolves to
//! closed, the safe answer for a shopping surface.
//!
//! # Known limitation
//!
//! Ranges that cross midnight (`"10:00 PM - 2:00 AM"`) evaluate as
//! never-open, because open/close are compared within a single calendar
//! day. The upstream data has no such ranges today; if one ever appears
//! the intended semantics need a product decision, not a silent guess.

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use gilded_avenue_core::{Store, WeeklyHours};

/// Parse one side of an hours entry, e.g. `"10:00 AM"`.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()
}

/// Parse a full `"<open> - <close>"` entry into its bounds.
pub(crate) fn parse_range(entry: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (open, close) = entry.split_once(" - ")?;
    Some((parse_clock(open)?, parse_clock(close)?))
}

/// Is the store open at `now`?
///
/// Looks up the entry for `now`'s weekday; a missing, `"Closed"`, or
/// unparseable entry is closed. Otherwise the store is open iff
/// `open <= now <= close` on the current weekday.
#[must_use]
pub fn is_open(store: &Store, now: NaiveDateTime) -> bool {
    let Some(entry) = store.hours.entry_for(now.weekday()) else {
        return false;
    };
    if entry == WeeklyHours::CLOSED {
        return false;
    }
    let Some((open, close)) = parse_range(entry) else {
        return false;
    };

    let time = now.time();
    open <= time && time <= close
}

/// The raw hours entry for `now`'s weekday, for display.
///
/// Returns `"Closed"` when the table has no entry for the day.
#[must_use]
pub fn todays_hours(store: &Store, now: NaiveDateTime) -> &str {
    store
        .hours
        .entry_for(now.weekday())
        .unwrap_or(WeeklyHours::CLOSED)
}
