//! Core types for Gilded Avenue.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod coordinates;
pub mod hours;
pub mod id;
pub mod price;
pub mod store;

pub use coordinates::Coordinates;
pub use hours::{WEEKDAY_NAMES, WeeklyHours};
pub use id::StoreId;
pub use price::{PriceRange, PriceRangeParseError};
pub use store::Store;
