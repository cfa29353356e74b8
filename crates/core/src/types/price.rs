//! Price-tier classification for stores.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PriceRange`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceRangeParseError {
    /// The input is not one of `$`, `$$`, `$$$`, `$$$$`.
    #[error("invalid price range: {0:?} (expected $ through $$$$)")]
    Invalid(String),
}

/// The price tier of a store, from `$` (budget) to `$$$$` (luxury).
///
/// Tiers serialize as their symbol form so catalog records can carry the
/// upstream `"priceRange": "$$$"` shape unchanged. The `Ord` derive
/// follows tier order, so `PriceRange::Budget < PriceRange::Luxury`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// Returns the display symbol for this tier (`"$"` .. `"$$$$"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Premium => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PriceRange {
    type Err = PriceRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Premium),
            "$$$$" => Ok(Self::Luxury),
            other => Err(PriceRangeParseError::Invalid(other.to_owned())),
        }
    }
}
