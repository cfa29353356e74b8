//! The store record.

use serde::{Deserialize, Serialize};

use super::{Coordinates, PriceRange, StoreId, WeeklyHours};

/// A partner store, as published in the catalog.
///
/// Records are immutable reference data: the catalog is loaded once and
/// never mutated, and everything the engine derives (open status,
/// distance, sale annotations) is computed per query, never written back.
///
/// Field names serialize in camelCase to match the upstream catalog
/// records (`priceRange`, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Stable identifier, unique within the catalog.
    pub id: StoreId,
    pub name: String,
    /// Free-form category label, e.g. `"Designer Fashion"`.
    pub category: String,
    /// Neighborhood label, e.g. `"Midtown"`.
    pub neighborhood: String,
    pub address: String,
    pub website: String,
    #[serde(default)]
    pub instagram: Option<String>,
    pub price_range: PriceRange,
    /// Average rating in [0, 5].
    pub rating: f64,
    pub coordinates: Coordinates,
    /// Weekly hours table keyed by lowercase weekday name.
    pub hours: WeeklyHours,
    /// Ordered tag list used by free-text search, e.g. `["Handbags", "Ready-to-wear"]`.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Display-priority hint for the surrounding surface.
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_camel_case_record() {
        let json = r#"{
            "id": "chanel-57th",
            "name": "Chanel",
            "category": "Designer Fashion",
            "neighborhood": "Midtown",
            "address": "15 E 57th St",
            "website": "https://www.chanel.com",
            "instagram": "@chanelofficial",
            "priceRange": "$$$$",
            "rating": 4.7,
            "coordinates": { "lat": 40.7625, "lng": -73.9738 },
            "hours": { "monday": "10:00 AM - 7:00 PM" },
            "specialties": ["Handbags", "Tweed"],
            "featured": true
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.id, StoreId::new("chanel-57th"));
        assert_eq!(store.price_range, PriceRange::Luxury);
        assert!(store.featured);
        assert_eq!(store.specialties, vec!["Handbags", "Tweed"]);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{
            "id": "atelier-9",
            "name": "Atelier Nine",
            "category": "Jewelry",
            "neighborhood": "SoHo",
            "address": "9 Greene St",
            "website": "https://atelier9.example",
            "priceRange": "$$$",
            "rating": 4.2,
            "coordinates": { "lat": 40.7214, "lng": -74.0015 },
            "hours": {}
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.instagram, None);
        assert!(store.specialties.is_empty());
        assert!(!store.featured);
    }
}
