//! Station records parsed from the GBFS feed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Opaque station identifier as issued by the feed.
///
/// GBFS guarantees stability of `station_id` within a system but says
/// nothing about its shape, so this is a thin wrapper rather than a
/// validated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap a raw feed identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Static station descriptor from `station_information.json`.
///
/// Immutable once fetched; the whole list is replaced on every feed pull.
#[derive(Debug, Clone, PartialEq)]
pub struct StationInfo {
    pub id: StationId,
    pub name: String,
    pub location: Coordinates,
}

/// Live station descriptor from `station_status.json`.
///
/// Fetched together with [`StationInfo`] as a matched pair from the same
/// pull; the two lists only ever travel together inside a [`FeedSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct StationStatus {
    pub station_id: StationId,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub is_renting: bool,
}

/// One complete feed pull: station information and status from the same
/// refresh, stored as a unit so info from one pull is never merged with
/// status from another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedSnapshot {
    pub info: Vec<StationInfo>,
    pub status: Vec<StationStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_id_display_and_as_str() {
        let id = StationId::new("gdansk-042");
        assert_eq!(id.as_str(), "gdansk-042");
        assert_eq!(format!("{}", id), "gdansk-042");
    }

    #[test]
    fn station_id_equality_and_hash() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(StationId::from("a"), 1);
        assert_eq!(map.get(&StationId::from("a")), Some(&1));
        assert_eq!(map.get(&StationId::from("b")), None);
    }

    #[test]
    fn station_id_serializes_transparently() {
        let id = StationId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
