//! Seeded PRNG and daily-seed derivation.
//!
//! The discovery surface has no backend, so "random for today" has to be
//! reproducible on every client from the calendar date alone. A date
//! becomes an integer seed, and the seed drives a tiny deterministic
//! generator. Given the same seed, the output is always identical.

use chrono::{Datelike, NaiveDate};

/// Deterministic hash-to-float generator.
///
/// Maps an integer seed to a value in `[0, 1)` via
/// `frac(sin(seed) * 10000)`. Not remotely cryptographic; it only needs
/// a visually uniform spread over catalogs of tens of items.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Derive the shared daily seed from a calendar date.
///
/// Encodes the date as `year * 10000 + month * 100 + day` (month
/// 1-based), so 2024-03-05 becomes `20240305`. Callers pass their LOCAL
/// calendar date: "today" is deliberately client-local, and users in
/// different timezones may see different orderings at the same instant.
/// The encoding is unambiguous for years 0000-9999.
#[must_use]
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_random_is_deterministic() {
        for seed in [-5, 0, 1, 42, 20_240_305] {
            assert_eq!(seeded_random(seed).to_bits(), seeded_random(seed).to_bits());
        }
    }

    #[test]
    fn seeded_random_stays_in_unit_interval() {
        for seed in -1_000..1_000 {
            let value = seeded_random(seed);
            assert!((0.0..1.0).contains(&value), "seed {seed} gave {value}");
        }
    }

    #[test]
    fn nearby_seeds_spread_apart() {
        let a = seeded_random(20_240_305);
        let b = seeded_random(20_240_306);
        assert!((a - b).abs() > 1e-6);
    }

    #[test]
    fn daily_seed_encodes_the_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(daily_seed(date), 20_240_305);
    }

    #[test]
    fn daily_seed_ignores_time_of_day() {
        let morning = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        let night = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(daily_seed(morning.date()), daily_seed(night.date()));
    }

    #[test]
    fn daily_seed_differs_across_days_months_and_years() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for other in [
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        ] {
            assert_ne!(daily_seed(base), daily_seed(other));
        }
    }
}
