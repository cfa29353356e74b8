//! Daily sale assignment.
//!
//! Each store either has a simulated sale for the day or it does not,
//! decided purely from the store identifier's digits and the daily seed.
//! Nothing is persisted; the annotation is recomputed on demand and is
//! bit-identical for identical inputs across process restarts.

use core::fmt;

use serde::Serialize;

use gilded_avenue_core::StoreId;

/// Fraction of the chance space that carries a sale: `chance < 25` of 100.
const SALE_CHANCE_CEILING: i64 = 25;
/// `chance < 8` is a flash sale.
const FLASH_SALE_CEILING: i64 = 8;
/// `chance < 15` (and not flash) is a weekend special.
const WEEKEND_SPECIAL_CEILING: i64 = 15;
/// Discount percentages run from `10` to `10 + 39`.
const MIN_PERCENTAGE: i64 = 10;
const PERCENTAGE_SPAN: i64 = 40;

/// The label attached to a day's sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SaleType {
    #[serde(rename = "Flash Sale")]
    FlashSale,
    #[serde(rename = "Weekend Special")]
    WeekendSpecial,
    #[serde(rename = "Daily Deal")]
    DailyDeal,
}

impl SaleType {
    /// Returns the display label, e.g. `"Flash Sale"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FlashSale => "Flash Sale",
            Self::WeekendSpecial => "Weekend Special",
            Self::DailyDeal => "Daily Deal",
        }
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A store's sale for one day.
///
/// Derived, never stored: recompute from `(store id, daily seed)` whenever
/// needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleAnnotation {
    pub store_id: StoreId,
    /// Discount percentage in [10, 49].
    pub sale_percentage: u8,
    pub sale_type: SaleType,
}

/// Fold the ascii digits of a store id into an integer.
///
/// `"chanel-57th"` folds to 57; an id with no digits folds to 0.
/// Wrapping arithmetic keeps the fold total for pathologically long
/// digit runs; the caller reduces modulo 100 anyway.
fn digit_value(id: &StoreId) -> i64 {
    id.as_str()
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
        })
}

/// Decide whether a store has a sale on the day identified by `daily_seed`.
///
/// The chance value is `(digits(id) + seed) mod 100`; values below 25
/// carry a sale with percentage `10 + (chance mod 40)` and a type picked
/// by the chance bands (`< 8` flash, `< 15` weekend special, else daily
/// deal). The thresholds are policy constants and must not drift.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sale_for(id: &StoreId, daily_seed: i64) -> Option<SaleAnnotation> {
    let chance = digit_value(id).wrapping_add(daily_seed).rem_euclid(100);
    if chance >= SALE_CHANCE_CEILING {
        return None;
    }

    let sale_percentage = (MIN_PERCENTAGE + chance % PERCENTAGE_SPAN) as u8;
    let sale_type = if chance < FLASH_SALE_CEILING {
        SaleType::FlashSale
    } else if chance < WEEKEND_SPECIAL_CEILING {
        SaleType::WeekendSpecial
    } else {
        SaleType::DailyDeal
    };

    Some(SaleAnnotation {
        store_id: id.clone(),
        sale_percentage,
        sale_type,
    })
}
