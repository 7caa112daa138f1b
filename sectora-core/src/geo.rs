//! Great-circle distance between coordinates.

use crate::model::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maximum distance between observer and sector for the sector to be offered.
pub const SERVICE_RADIUS_KM: f64 = 5.0;

/// Haversine distance in kilometres between two points.
///
/// Out-of-range or NaN coordinates are not rejected; NaN propagates into the
/// result.
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_KM * angle
}

/// Whether a distance passes the fixed service radius (inclusive).
#[must_use]
pub fn within_service_radius(distance_km: f64) -> bool {
    distance_km <= SERVICE_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOGOTA: Coordinates = Coordinates::new(4.710_989, -74.072_092);

    #[test]
    fn same_point_is_zero_distance() {
        for point in [
            BOGOTA,
            Coordinates::new(0.0, 0.0),
            Coordinates::new(-33.86, 151.2),
            Coordinates::new(89.9, 179.9),
        ] {
            assert_eq!(haversine_km(point, point), 0.0, "distance to self at {point}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let other = Coordinates::new(4.8, -74.3);
        let there = haversine_km(BOGOTA, other);
        let back = haversine_km(other, BOGOTA);
        assert!((there - back).abs() < 1e-9, "{there} vs {back}");
    }

    #[test]
    fn distance_grows_along_fixed_bearing() {
        let mut previous = 0.0;
        for step in 1..=200 {
            let offset = f64::from(step) * 0.005;
            let target = Coordinates::new(BOGOTA.lat + offset, BOGOTA.lng + offset);
            let distance = haversine_km(BOGOTA, target);
            assert!(distance > previous, "step {step}: {distance} <= {previous}");
            previous = distance;
        }
    }

    #[test]
    fn one_degree_of_latitude_matches_arc_length() {
        let north = Coordinates::new(BOGOTA.lat + 1.0, BOGOTA.lng);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        let distance = haversine_km(BOGOTA, north);
        assert!((distance - expected).abs() < 1e-6, "got {distance}, want {expected}");
    }

    #[test]
    fn bogota_to_suburb_is_far_outside_radius() {
        let distance = haversine_km(BOGOTA, Coordinates::new(4.8, -74.3));
        assert!((20.0..30.0).contains(&distance), "unexpected distance {distance}");
        assert!(!within_service_radius(distance), "suburb must be out of range");
    }

    #[test]
    fn service_radius_boundary_is_inclusive() {
        assert!(within_service_radius(5.0), "exactly 5 km is inside");
        assert!(within_service_radius(4.999_999), "just inside");
        assert!(!within_service_radius(5.000_001), "just outside");
        assert!(!within_service_radius(f64::NAN), "NaN never passes");
    }

    #[test]
    fn nan_coordinates_propagate() {
        let distance = haversine_km(BOGOTA, Coordinates::new(f64::NAN, -74.0));
        assert!(distance.is_nan(), "NaN input should yield NaN, got {distance}");
    }
}
