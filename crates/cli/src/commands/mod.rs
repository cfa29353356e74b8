//! CLI subcommands and shared helpers.

pub mod nearby;
pub mod query;
pub mod sales;
pub mod validate;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use gilded_avenue_engine::{Catalog, CatalogError};

/// Environment variable naming the default catalog file.
const CATALOG_ENV_VAR: &str = "GILDED_AVENUE_CATALOG";

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("no catalog path given; pass --catalog or set {CATALOG_ENV_VAR}")]
    MissingCatalogPath,

    #[error("invalid time {0:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolve the catalog path (flag, then environment) and load it.
pub fn load_catalog(flag: Option<&Path>) -> Result<Catalog, CliError> {
    let path: PathBuf = match flag {
        Some(path) => path.to_owned(),
        None => std::env::var_os(CATALOG_ENV_VAR)
            .map(PathBuf::from)
            .ok_or(CliError::MissingCatalogPath)?,
    };
    Ok(Catalog::load(path)?)
}

/// The engine takes an explicit clock; the CLI boundary is where the
/// local clock gets read.
pub fn resolve_moment(
    date: Option<NaiveDate>,
    time: Option<&str>,
) -> Result<NaiveDateTime, CliError> {
    let now = Local::now().naive_local();
    let date = date.unwrap_or_else(|| now.date());
    let time = match time {
        Some(raw) => parse_time(raw)?,
        None => now.time(),
    };
    Ok(date.and_time(time))
}

/// Resolve just the calendar date, defaulting to the local today.
pub fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn parse_time(raw: &str) -> Result<NaiveTime, CliError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| CliError::InvalidTime(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_clock_forms() {
        assert_eq!(
            parse_time("14:30").unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:05:30").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 30).unwrap()
        );
        assert!(parse_time("2pm").is_err());
    }

    #[test]
    fn explicit_date_and_time_bypass_the_local_clock() {
        let moment = resolve_moment(
            NaiveDate::from_ymd_opt(2024, 3, 5),
            Some("14:00"),
        )
        .unwrap();
        assert_eq!(moment.to_string(), "2024-03-05 14:00:00");
    }
}
