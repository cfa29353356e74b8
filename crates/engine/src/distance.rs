//! Great-circle distance.
//!
//! Kilometers are the engine's one and only distance unit. Anything that
//! wants miles converts at the display boundary with [`km_to_miles`];
//! nothing inside the engine mixes units.

use gilded_avenue_core::Coordinates;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const MILES_PER_KM: f64 = 0.621_371;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric, and zero for identical points. Invalid coordinates
/// (NaN, infinities) propagate through the math rather than being
/// clamped, so a NaN distance falls out of any `<= max` range filter.
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Convert kilometers to miles for display.
#[must_use]
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIDTOWN: Coordinates = Coordinates::new(40.7637, -73.9735);

    #[test]
    fn zero_for_identical_points() {
        assert!(distance_km(MIDTOWN, MIDTOWN).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric() {
        let soho = Coordinates::new(40.7233, -74.0030);
        assert!((distance_km(MIDTOWN, soho) - distance_km(soho, MIDTOWN)).abs() < 1e-12);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let north = Coordinates::new(MIDTOWN.lat + 1.0, MIDTOWN.lng);
        let d = distance_km(MIDTOWN, north);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn nan_coordinates_propagate() {
        let bad = Coordinates::new(f64::NAN, 0.0);
        assert!(distance_km(MIDTOWN, bad).is_nan());
    }

    #[test]
    fn converts_km_to_miles_at_the_boundary() {
        assert!((km_to_miles(10.0) - 6.213_71).abs() < 1e-9);
    }
}
