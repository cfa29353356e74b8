//! The composed catalog query pipeline.
//!
//! One entry point, [`query`], composes every stage the surface needs:
//! free-text search, category/neighborhood/price filters, distance
//! annotation and ranking, and the deterministic daily ordering. Omitted
//! options skip their stage, so a single-option query reduces to that
//! stage's behavior alone.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use gilded_avenue_core::{Coordinates, PriceRange, Store};

use crate::catalog::Catalog;
use crate::distance::distance_km;
use crate::hours::is_open;
use crate::sale::{SaleAnnotation, sale_for};
use crate::shuffle::shuffle;

/// Options for one catalog query. All fields are optional; an empty
/// options value returns the whole catalog in catalog order.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Case-insensitive substring matched against name, category,
    /// neighborhood, or any specialty tag.
    pub text: Option<String>,
    /// Case-insensitive substring matched against the category.
    pub category: Option<String>,
    /// Case-insensitive substring matched against the neighborhood.
    pub neighborhood: Option<String>,
    /// Exact price-tier match.
    pub price_range: Option<PriceRange>,
    /// When set, results carry distances and sort nearest-first.
    pub user_coordinates: Option<Coordinates>,
    /// Drop results farther than this many kilometers from the user.
    /// Only meaningful together with `user_coordinates`.
    pub max_distance_km: Option<f64>,
    /// Seed for the daily ordering and sale assignment; see
    /// [`daily_seed`](crate::seed::daily_seed). Without it, results keep
    /// catalog order and carry no sale annotations.
    pub daily_seed: Option<i64>,
}

/// One result row: the store plus everything computed for this query.
///
/// Request-scoped; recompute rather than cache.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView<'a> {
    pub store: &'a Store,
    pub is_open: bool,
    /// Distance from the query's user coordinate, in kilometers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<SaleAnnotation>,
}

/// Does `haystack` contain the already-lowercased `needle`?
fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Free-text match: any of name, category, neighborhood, or a specialty.
fn matches_text(store: &Store, lowered_needle: &str) -> bool {
    contains_ci(&store.name, lowered_needle)
        || contains_ci(&store.category, lowered_needle)
        || contains_ci(&store.neighborhood, lowered_needle)
        || store
            .specialties
            .iter()
            .any(|tag| contains_ci(tag, lowered_needle))
}

/// Run the full query pipeline over a catalog.
///
/// Stage order: text, category, neighborhood, price, then either
/// distance annotation/ranking (when `user_coordinates` is set) or the
/// daily ordering (sale-annotated stores first in catalog order, the
/// rest shuffled under the seed). Every row carries `is_open` resolved
/// against `now`, which callers supply explicitly so results are
/// reproducible in tests.
#[must_use]
pub fn query<'a>(
    catalog: &'a Catalog,
    opts: &QueryOptions,
    now: NaiveDateTime,
) -> Vec<StoreView<'a>> {
    let mut survivors: Vec<&Store> = catalog.stores().iter().collect();

    if let Some(text) = &opts.text {
        let needle = text.to_lowercase();
        survivors.retain(|store| matches_text(store, &needle));
    }
    if let Some(category) = &opts.category {
        let needle = category.to_lowercase();
        survivors.retain(|store| contains_ci(&store.category, &needle));
    }
    if let Some(neighborhood) = &opts.neighborhood {
        let needle = neighborhood.to_lowercase();
        survivors.retain(|store| contains_ci(&store.neighborhood, &needle));
    }
    if let Some(tier) = opts.price_range {
        survivors.retain(|store| store.price_range == tier);
    }

    debug!(
        total = catalog.len(),
        matched = survivors.len(),
        "catalog filters applied"
    );

    if let Some(user) = opts.user_coordinates {
        return ranked_by_distance(survivors, user, opts, now);
    }

    let ordered = match opts.daily_seed {
        Some(seed) => daily_order(survivors, seed),
        None => survivors,
    };

    ordered
        .into_iter()
        .map(|store| StoreView {
            store,
            is_open: is_open(store, now),
            distance_km: None,
            sale: opts
                .daily_seed
                .and_then(|seed| sale_for(&store.id, seed)),
        })
        .collect()
}

/// Distance stage: annotate, optionally bound, sort nearest-first.
fn ranked_by_distance<'a>(
    survivors: Vec<&'a Store>,
    user: Coordinates,
    opts: &QueryOptions,
    now: NaiveDateTime,
) -> Vec<StoreView<'a>> {
    let mut rows: Vec<StoreView<'a>> = survivors
        .into_iter()
        .map(|store| StoreView {
            store,
            is_open: is_open(store, now),
            distance_km: Some(distance_km(user, store.coordinates)),
            sale: opts
                .daily_seed
                .and_then(|seed| sale_for(&store.id, seed)),
        })
        .collect();

    if let Some(max) = opts.max_distance_km {
        // A NaN distance (invalid catalog coordinates) fails the bound.
        rows.retain(|row| row.distance_km.is_some_and(|d| d <= max));
    }

    rows.sort_by(|a, b| {
        a.distance_km
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
    });
    rows
}

/// Daily ordering: sale stores first in catalog order, then the
/// deterministic shuffle of the rest under the same seed.
fn daily_order(survivors: Vec<&Store>, seed: i64) -> Vec<&Store> {
    let (on_sale, rest): (Vec<&Store>, Vec<&Store>) = survivors
        .into_iter()
        .partition(|store| sale_for(&store.id, seed).is_some());

    on_sale.into_iter().chain(shuffle(&rest, seed)).collect()
}
