//! Integration tests for Gilded Avenue.
//!
//! The tests exercise the engine end-to-end through its public surface:
//! a fixture catalog goes in, query results come out, and everything in
//! between (seeding, sale assignment, shuffling, distance ranking, open
//! status) is observed through [`gilded_avenue_engine::query`] the way a
//! caller would.
//!
//! # Test Categories
//!
//! - `pipeline` - Filter composition and ordering behavior
//! - `daily_rotation` - Day-to-day determinism of ordering and sales
//! - `store_hours` - Open-status scenarios against a simulated clock
//! - `catalog_loading` - JSON loading and invariant validation
//!
//! Run with: `cargo test -p gilded-avenue-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{NaiveDate, NaiveDateTime};

use gilded_avenue_core::{Coordinates, PriceRange, Store, StoreId, WEEKDAY_NAMES, WeeklyHours};
use gilded_avenue_engine::Catalog;

/// An hours table that is open `10:00 AM - 7:00 PM` every day.
#[must_use]
pub fn everyday_hours() -> WeeklyHours {
    WEEKDAY_NAMES
        .iter()
        .map(|day| (*day, "10:00 AM - 7:00 PM"))
        .collect()
}

/// A builder-ish helper for fixture stores; tests override what they
/// care about on the returned value.
#[must_use]
pub fn fixture_store(id: &str, name: &str) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_owned(),
        category: "Designer Fashion".to_owned(),
        neighborhood: "Midtown".to_owned(),
        address: "1 Main St, New York, NY".to_owned(),
        website: "https://example.com".to_owned(),
        instagram: None,
        price_range: PriceRange::Premium,
        rating: 4.0,
        coordinates: Coordinates::new(40.7600, -73.9750),
        hours: everyday_hours(),
        specialties: vec![],
        featured: false,
    }
}

/// The shared fixture catalog: a dozen Manhattan/Brooklyn stores with
/// enough variety to exercise every pipeline stage.
///
/// # Panics
///
/// Panics if the fixture ever violates catalog invariants, which would
/// be a bug in the fixture itself.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn fixture_catalog() -> Catalog {
    let mut chanel = fixture_store("chanel-57th", "Chanel");
    chanel.neighborhood = "Midtown".to_owned();
    chanel.address = "15 E 57th St, New York, NY".to_owned();
    chanel.price_range = PriceRange::Luxury;
    chanel.rating = 4.7;
    chanel.coordinates = Coordinates::new(40.7625, -73.9738);
    chanel.specialties = vec!["Handbags".to_owned(), "Tweed".to_owned()];
    chanel.featured = true;

    let mut gucci = fixture_store("gucci-5th-ave", "Gucci");
    gucci.price_range = PriceRange::Luxury;
    gucci.rating = 4.5;
    gucci.coordinates = Coordinates::new(40.7590, -73.9745);
    gucci.specialties = vec!["Leather Goods".to_owned(), "Loafers".to_owned()];
    gucci.featured = true;

    let mut bergdorf = fixture_store("bergdorf-goodman", "Bergdorf Goodman");
    bergdorf.category = "Department Store".to_owned();
    bergdorf.price_range = PriceRange::Luxury;
    bergdorf.rating = 4.6;
    bergdorf.coordinates = Coordinates::new(40.7639, -73.9738);
    bergdorf.specialties = vec!["Designer Collections".to_owned(), "Shoes".to_owned()];

    let mut tiffany = fixture_store("tiffany-727", "Tiffany & Co.");
    tiffany.category = "Jewelry".to_owned();
    tiffany.price_range = PriceRange::Luxury;
    tiffany.rating = 4.4;
    tiffany.coordinates = Coordinates::new(40.7629, -73.9735);
    tiffany.specialties = vec!["Engagement Rings".to_owned(), "Silver".to_owned()];

    let mut soho_atelier = fixture_store("atelier-9", "Atelier Nine");
    soho_atelier.category = "Jewelry".to_owned();
    soho_atelier.neighborhood = "SoHo".to_owned();
    soho_atelier.address = "9 Greene St, New York, NY".to_owned();
    soho_atelier.price_range = PriceRange::Premium;
    soho_atelier.rating = 4.2;
    soho_atelier.coordinates = Coordinates::new(40.7214, -74.0015);
    soho_atelier.specialties = vec!["Custom Pieces".to_owned()];

    let mut heritage = fixture_store("heritage-row", "Heritage Row");
    heritage.category = "Vintage".to_owned();
    heritage.neighborhood = "Williamsburg".to_owned();
    heritage.address = "120 Bedford Ave, Brooklyn, NY".to_owned();
    heritage.price_range = PriceRange::Moderate;
    heritage.rating = 4.3;
    heritage.coordinates = Coordinates::new(40.7180, -73.9570);
    heritage.specialties = vec!["Gucci archive".to_owned(), "Denim".to_owned()];

    let mut corner_books = fixture_store("corner-books", "Corner Books");
    corner_books.category = "Books".to_owned();
    corner_books.neighborhood = "West Village".to_owned();
    corner_books.price_range = PriceRange::Budget;
    corner_books.rating = 4.8;
    corner_books.coordinates = Coordinates::new(40.7336, -74.0027);
    corner_books.specialties = vec!["First Editions".to_owned()];
    // Closed on mondays; short saturday.
    corner_books.hours = WEEKDAY_NAMES
        .iter()
        .map(|day| match *day {
            "monday" => (*day, "Closed"),
            "saturday" => (*day, "11:00 AM - 5:00 PM"),
            _ => (*day, "10:00 AM - 7:00 PM"),
        })
        .collect();

    let mut maison = fixture_store("maison-blanche", "Maison Blanche");
    maison.category = "Home Goods".to_owned();
    maison.neighborhood = "SoHo".to_owned();
    maison.price_range = PriceRange::Premium;
    maison.rating = 4.1;
    maison.coordinates = Coordinates::new(40.7230, -74.0005);

    let mut sneaker = fixture_store("sole-stand-23", "Sole Stand");
    sneaker.category = "Sneakers".to_owned();
    sneaker.neighborhood = "Lower East Side".to_owned();
    sneaker.price_range = PriceRange::Moderate;
    sneaker.rating = 4.0;
    sneaker.coordinates = Coordinates::new(40.7190, -73.9890);
    sneaker.specialties = vec!["Limited Drops".to_owned()];

    let mut perfumer = fixture_store("essence-31", "Essence");
    perfumer.category = "Fragrance".to_owned();
    perfumer.neighborhood = "Nolita".to_owned();
    perfumer.price_range = PriceRange::Premium;
    perfumer.rating = 4.5;
    perfumer.coordinates = Coordinates::new(40.7223, -73.9955);

    Catalog::from_stores(vec![
        chanel,
        gucci,
        bergdorf,
        tiffany,
        soho_atelier,
        heritage,
        corner_books,
        maison,
        sneaker,
        perfumer,
    ])
    .expect("fixture catalog must satisfy catalog invariants")
}

/// A Monday afternoon, when every fixture store except Corner Books is
/// open. 2024-03-04 is a Monday.
#[must_use]
pub fn monday_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4)
        .expect("valid date")
        .and_hms_opt(14, 0, 0)
        .expect("valid time")
}
