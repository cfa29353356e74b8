//! The immutable store catalog.
//!
//! The catalog is loaded once at startup and handed out by shared
//! reference; no engine call ever mutates it. Loading validates the
//! hard invariants (unique ids, complete hours tables) and warns about
//! tolerated data problems (out-of-range coordinates, unparseable hours
//! entries), which the query pipeline degrades around at query time.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use gilded_avenue_core::{Store, WeeklyHours};

use crate::error::CatalogError;
use crate::hours;

/// An ordered, immutable collection of partner stores.
#[derive(Debug, Clone)]
pub struct Catalog {
    stores: Vec<Store>,
}

impl Catalog {
    /// Build a catalog from store records, validating invariants.
    ///
    /// Record order is preserved: "catalog order" is the order given
    /// here, and the daily ordering stage of the pipeline is defined
    /// relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id,
    /// or [`CatalogError::IncompleteHours`] if a record's hours table
    /// does not cover all seven weekdays.
    pub fn from_stores(stores: Vec<Store>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for store in &stores {
            if !seen.insert(store.id.as_str()) {
                return Err(CatalogError::DuplicateId(store.id.to_string()));
            }

            let missing = store.hours.missing_days();
            if !missing.is_empty() {
                return Err(CatalogError::IncompleteHours {
                    id: store.id.to_string(),
                    days: missing.join(", "),
                });
            }

            if !store.coordinates.is_valid() {
                warn!(
                    store = %store.id,
                    lat = store.coordinates.lat,
                    lng = store.coordinates.lng,
                    "store has out-of-range coordinates; distance filters will exclude it"
                );
            }

            for (day, entry) in store.hours.iter() {
                if entry != WeeklyHours::CLOSED && hours::parse_range(entry).is_none() {
                    warn!(
                        store = %store.id,
                        day,
                        entry,
                        "unparseable hours entry; the store will resolve as closed that day"
                    );
                }
            }
        }

        Ok(Self { stores })
    }

    /// Parse a catalog from a JSON array of store records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, plus any
    /// validation error from [`Catalog::from_stores`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stores: Vec<Store> = serde_json::from_str(json)?;
        Self::from_stores(stores)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, plus any
    /// parse or validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            stores = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All stores, in catalog order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Look up a store by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.id.as_str() == id)
    }

    /// Stores flagged as featured, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Store> {
        self.stores.iter().filter(|store| store.featured)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
