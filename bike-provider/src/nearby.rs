//! Merging live status onto station information and filtering by proximity.
//!
//! This is the request-path algorithm: it runs on a cached snapshot and
//! does no I/O. Proximity always uses great-circle distance; routed
//! distance is reserved for the trip-distance operation.

use std::collections::HashMap;

use crate::domain::{
    Coordinates, FeedSnapshot, NearbyVehicle, StationId, StationStatus, VehicleType, round_km,
};
use crate::geo;

/// Produce the distance-sorted list of available stations within
/// `radius_km` of `origin`.
///
/// Stations with no matching status record are treated as having zero
/// bikes, and stations with zero bikes are dropped before any distance
/// work. Duplicate `station_id`s in the status feed are not expected but
/// must not crash; the last record wins. The returned `distance_km` is
/// rounded to two decimals and the radius filter applies to that rounded
/// figure, so every returned value is ≤ `radius_km`. An empty result is
/// success, not an error.
pub fn nearby_vehicles(
    snapshot: &FeedSnapshot,
    provider: &str,
    origin: Coordinates,
    radius_km: f64,
) -> Vec<NearbyVehicle> {
    // Last write wins on duplicate ids.
    let status_by_id: HashMap<&StationId, &StationStatus> = snapshot
        .status
        .iter()
        .map(|s| (&s.station_id, s))
        .collect();

    let mut vehicles: Vec<NearbyVehicle> = snapshot
        .info
        .iter()
        .filter_map(|info| {
            let status = status_by_id.get(&info.id)?;
            if status.bikes_available == 0 {
                return None;
            }

            let distance_km = round_km(geo::great_circle_km(origin, info.location));
            if distance_km > radius_km {
                return None;
            }

            Some(NearbyVehicle {
                id: info.id.clone(),
                vehicle_type: VehicleType::Bike,
                provider: provider.to_string(),
                name: info.name.clone(),
                location: info.location,
                distance_km,
                bikes_available: status.bikes_available,
                docks_available: status.docks_available,
                is_available: status.bikes_available > 0,
            })
        })
        .collect();

    // sort_by is stable: equal distances keep feed order.
    vehicles.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    vehicles
}
