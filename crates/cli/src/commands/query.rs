//! `query` - Run the full pipeline and print rows as JSON.

use chrono::NaiveDate;

use gilded_avenue_core::{Coordinates, PriceRange};
use gilded_avenue_engine::{Catalog, QueryOptions, daily_seed, query};

use super::CliError;

/// Flags for the `query` subcommand.
pub struct Args {
    pub text: Option<String>,
    pub category: Option<String>,
    pub neighborhood: Option<String>,
    pub price: Option<PriceRange>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub max_km: Option<f64>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub no_daily: bool,
}

pub fn run(catalog: &Catalog, args: Args) -> Result<(), CliError> {
    let now = super::resolve_moment(args.date, args.time.as_deref())?;

    let user_coordinates = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => None,
    };

    let opts = QueryOptions {
        text: args.text,
        category: args.category,
        neighborhood: args.neighborhood,
        price_range: args.price,
        user_coordinates,
        max_distance_km: args.max_km,
        daily_seed: (!args.no_daily).then_some(daily_seed(now.date())),
    };

    let rows = query(catalog, &opts, now);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
