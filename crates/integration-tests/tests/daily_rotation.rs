//! Day-to-day behavior: the surface looks fresh every day, yet every
//! client on the same day sees exactly the same thing.

use chrono::NaiveDate;

use gilded_avenue_engine::{QueryOptions, SaleType, StoreView, daily_seed, query, sale_for};
use gilded_avenue_integration_tests::{fixture_catalog, monday_afternoon};

fn ids<'a>(rows: &[StoreView<'a>]) -> Vec<&'a str> {
    rows.iter().map(|row| row.store.id.as_str()).collect()
}

fn seed_for(year: i32, month: u32, day: u32) -> i64 {
    daily_seed(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

#[test]
fn the_same_day_always_produces_the_same_surface() {
    let catalog = fixture_catalog();
    let opts = QueryOptions {
        daily_seed: Some(seed_for(2024, 3, 5)),
        ..Default::default()
    };
    let first = ids(&query(&catalog, &opts, monday_afternoon()));
    let second = ids(&query(&catalog, &opts, monday_afternoon()));
    assert_eq!(first, second);
}

#[test]
fn sale_stores_lead_in_catalog_order_then_the_rest_rotate() {
    let catalog = fixture_catalog();
    let opts = QueryOptions {
        daily_seed: Some(seed_for(2024, 3, 5)),
        ..Default::default()
    };
    let rows = query(&catalog, &opts, monday_afternoon());

    // For 2024-03-05 the chance values put exactly these six stores on
    // sale; they lead in catalog order.
    let lead: Vec<&str> = ids(&rows).into_iter().take(6).collect();
    assert_eq!(
        lead,
        [
            "gucci-5th-ave",
            "bergdorf-goodman",
            "atelier-9",
            "heritage-row",
            "corner-books",
            "maison-blanche",
        ]
    );
    assert!(rows.iter().take(6).all(|row| row.sale.is_some()));

    // The remaining four follow in some seed-determined rotation.
    let mut tail: Vec<&str> = ids(&rows).into_iter().skip(6).collect();
    tail.sort_unstable();
    assert_eq!(
        tail,
        ["chanel-57th", "essence-31", "sole-stand-23", "tiffany-727"]
    );
    assert!(rows.iter().skip(6).all(|row| row.sale.is_none()));
}

#[test]
fn sale_annotations_match_the_documented_formula() {
    let catalog = fixture_catalog();
    let seed = seed_for(2024, 3, 5);

    // gucci-5th-ave folds to 5; (5 + 20240305) mod 100 = 10, so 20% off
    // as a Weekend Special.
    let gucci = catalog.get("gucci-5th-ave").expect("fixture store");
    let sale = sale_for(&gucci.id, seed).expect("on sale that day");
    assert_eq!(sale.sale_percentage, 20);
    assert_eq!(sale.sale_type, SaleType::WeekendSpecial);

    // bergdorf-goodman has no digits; chance is 5, a 15% flash sale.
    let bergdorf = catalog.get("bergdorf-goodman").expect("fixture store");
    let sale = sale_for(&bergdorf.id, seed).expect("on sale that day");
    assert_eq!(sale.sale_percentage, 15);
    assert_eq!(sale.sale_type, SaleType::FlashSale);

    // chanel-57th folds to 57; chance 62 means no sale.
    let chanel = catalog.get("chanel-57th").expect("fixture store");
    assert!(sale_for(&chanel.id, seed).is_none());
}

#[test]
fn the_sale_set_changes_across_the_month() {
    let catalog = fixture_catalog();

    let sale_set = |seed: i64| -> Vec<&str> {
        catalog
            .stores()
            .iter()
            .filter(|store| sale_for(&store.id, seed).is_some())
            .map(|store| store.id.as_str())
            .collect()
    };

    // The chance space shifts with the date; by the 20th the 5th's set
    // no longer holds (gucci and atelier-9 drop out).
    assert_ne!(
        sale_set(seed_for(2024, 3, 5)),
        sale_set(seed_for(2024, 3, 20))
    );
}

#[test]
fn the_surface_order_changes_somewhere_across_a_month() {
    let catalog = fixture_catalog();

    let orders: Vec<Vec<String>> = (1..=30)
        .map(|day| {
            let opts = QueryOptions {
                daily_seed: Some(seed_for(2024, 4, day)),
                ..Default::default()
            };
            query(&catalog, &opts, monday_afternoon())
                .iter()
                .map(|row| row.store.id.to_string())
                .collect()
        })
        .collect();

    let first = orders.first().expect("at least one day");
    assert!(
        orders.iter().any(|order| order != first),
        "thirty consecutive days all produced the identical order"
    );
}

#[test]
fn queries_without_a_seed_carry_no_sales() {
    let catalog = fixture_catalog();
    let rows = query(&catalog, &QueryOptions::default(), monday_afternoon());
    assert!(rows.iter().all(|row| row.sale.is_none()));
}
