//! `nearby` - Rank stores by distance from a coordinate.
//!
//! Distances are kilometers inside the engine; `--miles` converts at
//! this display boundary only.

use gilded_avenue_core::Coordinates;
use gilded_avenue_engine::{Catalog, QueryOptions, km_to_miles, query};

use super::CliError;

pub fn run(
    catalog: &Catalog,
    lat: f64,
    lng: f64,
    max_km: Option<f64>,
    miles: bool,
) -> Result<(), CliError> {
    let now = super::resolve_moment(None, None)?;
    let opts = QueryOptions {
        user_coordinates: Some(Coordinates::new(lat, lng)),
        max_distance_km: max_km,
        ..Default::default()
    };

    for row in query(catalog, &opts, now) {
        let Some(km) = row.distance_km else { continue };
        let (value, unit) = if miles {
            (km_to_miles(km), "mi")
        } else {
            (km, "km")
        };
        let status = if row.is_open { "open" } else { "closed" };
        println!(
            "{value:>7.2} {unit}  {:<24} {:<28} ({status})",
            row.store.id, row.store.name
        );
    }
    Ok(())
}
