//! `validate` - Load a catalog and report what it contains.
//!
//! Hard invariant violations (duplicate ids, incomplete hours tables)
//! fail the load itself; tolerated data problems are logged as warnings
//! by the loader while it runs.

use gilded_avenue_engine::Catalog;

use super::CliError;

pub fn run(catalog: &Catalog) -> Result<(), CliError> {
    println!("catalog OK: {} stores", catalog.len());
    println!("  featured: {}", catalog.featured().count());

    let neighborhoods: std::collections::BTreeSet<&str> = catalog
        .stores()
        .iter()
        .map(|store| store.neighborhood.as_str())
        .collect();
    println!("  neighborhoods: {}", neighborhoods.len());
    for neighborhood in neighborhoods {
        println!("    - {neighborhood}");
    }

    Ok(())
}
