//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
///
/// Latitude is in [-90, 90] and longitude in [-180, 180] for any point on
/// Earth. The HTTP layer validates ranges before calling into this crate;
/// every computation here is total for arbitrary finite values, so an
/// out-of-range pair degrades to a nonsense distance rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
