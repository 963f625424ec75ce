//! Great-circle distance on a spherical Earth.
//!
//! Proximity filtering always uses this straight-line distance: it is
//! deterministic and costs nothing per station, unlike routed distance.

use crate::domain::Coordinates;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// Pure and total: defined for any finite input, symmetric in its
/// arguments, and zero (up to floating-point) for identical points.
pub fn great_circle_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` marginally above 1 near antipodal points,
    // which would take asin out of its domain.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}
