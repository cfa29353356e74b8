//! `sales` - List the day's deterministic sale assignments.

use chrono::NaiveDate;

use gilded_avenue_engine::{Catalog, daily_seed, sale_for};

use super::CliError;

pub fn run(catalog: &Catalog, date: Option<NaiveDate>) -> Result<(), CliError> {
    let date = super::resolve_date(date);
    let seed = daily_seed(date);

    let mut count = 0;
    for store in catalog.stores() {
        if let Some(sale) = sale_for(&store.id, seed) {
            println!(
                "{:<24} {:>2}% off  {}",
                store.id, sale.sale_percentage, sale.sale_type
            );
            count += 1;
        }
    }
    println!("{count} of {} stores on sale for {date}", catalog.len());
    Ok(())
}
