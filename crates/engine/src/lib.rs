//! Gilded Avenue Engine - The catalog query engine.
//!
//! Everything with real logic in the discovery surface lives here: the
//! daily deterministic ordering, the simulated sale assignment, the
//! text/category/neighborhood/price filters, and proximity ranking.
//! Surrounding presentation code calls [`query`] with a
//! [`QueryOptions`] and renders whatever comes back.
//!
//! # Determinism
//!
//! The engine is synchronous and side-effect-free. It never reads the
//! global clock or any randomness source: callers pass the current
//! date/time explicitly, and all "random" behavior derives from the
//! [daily seed](seed::daily_seed) through a pure seeded generator. Two
//! callers with the same catalog, seed, and clock always see the same
//! results.
//!
//! # Modules
//!
//! - [`catalog`] - The immutable store collection and its JSON loader
//! - [`seed`] - Seeded PRNG and daily-seed derivation
//! - [`sale`] - Daily sale assignment
//! - [`shuffle`] - Deterministic Fisher–Yates shuffle
//! - [`distance`] - Haversine distance
//! - [`hours`] - Open-status resolution against weekly hours tables
//! - [`query`] - The composed filter/sort pipeline

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod distance;
pub mod error;
pub mod hours;
pub mod query;
pub mod sale;
pub mod seed;
pub mod shuffle;

pub use catalog::Catalog;
pub use distance::{distance_km, km_to_miles};
pub use error::CatalogError;
pub use hours::{is_open, todays_hours};
pub use query::{QueryOptions, StoreView, query};
pub use sale::{SaleAnnotation, SaleType, sale_for};
pub use seed::{daily_seed, seeded_random};
pub use shuffle::shuffle;
