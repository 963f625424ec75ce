//! The per-request output record served to the HTTP layer.

use serde::Serialize;

use super::{Coordinates, StationId};

/// Kind of shared vehicle. The MEVO feed only carries docked bikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Bike,
}

/// A station with bikes available, within the requested radius.
///
/// Constructed fresh from a feed snapshot for each request and never
/// mutated afterwards. Lists of these are ordered by ascending
/// `distance_km`, ties keeping feed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyVehicle {
    pub id: StationId,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub provider: String,
    pub name: String,
    pub location: Coordinates,
    /// Great-circle distance from the request origin, rounded to 2 decimals.
    pub distance_km: f64,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub is_available: bool,
}

/// Round a kilometre figure to two decimal places for output.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
