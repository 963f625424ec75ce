//! GBFS wire DTOs.
//!
//! These map the exact JSON shape of `station_information.json` and
//! `station_status.json`. Required fields are not `Option`: a feed
//! document missing one of them fails deserialization, which the client
//! reports as a fetch failure rather than carrying half-parsed data
//! downstream.

use serde::Deserialize;

use crate::domain::{Coordinates, StationId, StationInfo, StationStatus};

/// The `data.stations` envelope of `station_information.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationFeed {
    pub data: StationInformationData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationData {
    pub stations: Vec<StationInformationDto>,
}

/// Static descriptor of one station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// The `data.stations` envelope of `station_status.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusFeed {
    pub data: StationStatusData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusData {
    pub stations: Vec<StationStatusDto>,
}

/// Live availability of one station.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    pub station_id: String,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
    /// GBFS encodes this as an integer; `1` means the station is renting.
    pub is_renting: u8,
}

impl StationInformationFeed {
    /// Convert the wire document into domain records.
    pub fn into_domain(self) -> Vec<StationInfo> {
        self.data
            .stations
            .into_iter()
            .map(|s| StationInfo {
                id: StationId::new(s.station_id),
                name: s.name,
                location: Coordinates::new(s.lat, s.lon),
            })
            .collect()
    }
}

impl StationStatusFeed {
    /// Convert the wire document into domain records.
    pub fn into_domain(self) -> Vec<StationStatus> {
        self.data
            .stations
            .into_iter()
            .map(|s| StationStatus {
                station_id: StationId::new(s.station_id),
                bikes_available: s.num_bikes_available,
                docks_available: s.num_docks_available,
                is_renting: s.is_renting == 1,
            })
            .collect()
    }
}
