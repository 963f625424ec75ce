//! Domain types for the bike-share provider.
//!
//! Records here are the typed counterparts of the loose JSON the upstream
//! feed serves. Parsing and validation happen once at the feed boundary;
//! everything downstream works with these types and can trust their shape.

mod coords;
mod station;
mod vehicle;

pub use coords::Coordinates;
pub use station::{FeedSnapshot, StationId, StationInfo, StationStatus};
pub use vehicle::{NearbyVehicle, VehicleType, round_km};
