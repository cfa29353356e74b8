//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Catalog records carry pre-assigned coordinates; the engine never
/// geocodes. Validity is advisory: the catalog loader warns about
/// out-of-range values but keeps the record, and distance math lets
/// NaN/infinity propagate so range filters exclude such rows naturally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in decimal degrees, valid range [-180, 180].
    pub lng: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` if both components are finite and within the
    /// valid latitude/longitude ranges.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_coordinates() {
        assert!(Coordinates::new(40.7637, -73.9735).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn deserializes_from_catalog_shape() {
        let c: Coordinates = serde_json::from_str(r#"{"lat":40.76,"lng":-73.97}"#).unwrap();
        assert_eq!(c, Coordinates::new(40.76, -73.97));
    }
}
