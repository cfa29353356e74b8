//! Gilded Avenue CLI - Catalog inspection and validation tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog file
//! gilded-avenue --catalog stores.json validate
//!
//! # Today's discovery surface for a text query
//! gilded-avenue --catalog stores.json query --text gucci
//!
//! # The day's sale assignments
//! gilded-avenue --catalog stores.json sales --date 2024-03-05
//!
//! # Stores ranked by distance from a coordinate
//! gilded-avenue --catalog stores.json nearby --lat 40.7637 --lng -73.9735 --max-km 3
//! ```
//!
//! The catalog path may also come from the `GILDED_AVENUE_CATALOG`
//! environment variable; a `.env` file is honored.
//!
//! # Commands
//!
//! - `validate` - Load a catalog and report validation results
//! - `query` - Run the full query pipeline, printing rows as JSON
//! - `sales` - List the day's deterministic sale set
//! - `nearby` - Rank stores by distance from a coordinate

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks on stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use gilded_avenue_core::PriceRange;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "gilded-avenue")]
#[command(author, version, about = "Gilded Avenue catalog tools")]
struct Cli {
    /// Path to the catalog JSON file (defaults to $GILDED_AVENUE_CATALOG)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog file and report validation results
    Validate,
    /// Run the full query pipeline and print result rows as JSON
    Query {
        /// Free-text search across name, category, neighborhood, specialties
        #[arg(short, long)]
        text: Option<String>,

        /// Category substring filter
        #[arg(long)]
        category: Option<String>,

        /// Neighborhood substring filter
        #[arg(long)]
        neighborhood: Option<String>,

        /// Exact price tier ($ through $$$$)
        #[arg(long)]
        price: Option<PriceRange>,

        /// User latitude (enables distance ranking; requires --lng)
        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        /// User longitude
        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        /// Drop stores farther than this many kilometers
        #[arg(long)]
        max_km: Option<f64>,

        /// Calendar date for the daily ordering (default: today, local)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Clock time for open-status, HH:MM (default: now, local)
        #[arg(long)]
        time: Option<String>,

        /// Skip the daily ordering and sale assignment
        #[arg(long)]
        no_daily: bool,
    },
    /// List the day's sale assignments
    Sales {
        /// Calendar date (default: today, local)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Rank stores by distance from a coordinate
    Nearby {
        /// User latitude
        #[arg(long)]
        lat: f64,

        /// User longitude
        #[arg(long)]
        lng: f64,

        /// Drop stores farther than this many kilometers
        #[arg(long)]
        max_km: Option<f64>,

        /// Display distances in miles instead of kilometers
        #[arg(long)]
        miles: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Validate => commands::validate::run(&catalog),
        Commands::Query {
            text,
            category,
            neighborhood,
            price,
            lat,
            lng,
            max_km,
            date,
            time,
            no_daily,
        } => commands::query::run(
            &catalog,
            commands::query::Args {
                text,
                category,
                neighborhood,
                price,
                lat,
                lng,
                max_km,
                date,
                time,
                no_daily,
            },
        ),
        Commands::Sales { date } => commands::sales::run(&catalog, date),
        Commands::Nearby {
            lat,
            lng,
            max_km,
            miles,
        } => commands::nearby::run(&catalog, lat, lng, max_km, miles),
    }
}
