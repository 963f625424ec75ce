//! Public entry point for the MEVO bike-share provider.
//!
//! The facade owns the two caches and exposes the only operations the
//! surrounding web service calls into. It is constructed once per process
//! and shared (behind an `Arc`) across concurrent request handlers; it
//! holds no state of its own beyond the injected caches.
//!
//! Nothing here returns an error: a broken feed degrades to an empty
//! vehicle list and a broken routing service degrades to great-circle
//! distance, both logged at warning level.

use crate::cache::CachedFeed;
use crate::domain::{Coordinates, NearbyVehicle};
use crate::gbfs::{GbfsClient, StationFeed};
use crate::nearby;
use crate::routing::{CachedRouter, OsrmClient, RouteBackend, RouteEstimate};

/// Identifier of the data source backing this provider.
pub const PROVIDER_NAME: &str = "MEVO";

/// The nearby-vehicle and trip-distance provider.
///
/// Generic over the feed and routing backends so tests can inject fakes;
/// production code uses the defaults.
///
/// # Examples
///
/// ```no_run
/// use bike_provider::cache::{CachedFeed, FeedCacheConfig};
/// use bike_provider::gbfs::{GbfsClient, GbfsConfig};
/// use bike_provider::provider::MevoProvider;
/// use bike_provider::routing::{CachedRouter, OsrmClient, OsrmConfig, RouteCacheConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let feed = CachedFeed::new(GbfsClient::new(GbfsConfig::new())?, &FeedCacheConfig::default());
/// let router = CachedRouter::new(OsrmClient::new(OsrmConfig::new())?, &RouteCacheConfig::default());
/// let provider = MevoProvider::new(feed, router);
/// # Ok(())
/// # }
/// ```
pub struct MevoProvider<F = GbfsClient, R = OsrmClient> {
    feed: CachedFeed<F>,
    router: CachedRouter<R>,
}

impl<F: StationFeed, R: RouteBackend> MevoProvider<F, R> {
    /// Create a provider from its injected caches.
    pub fn new(feed: CachedFeed<F>, router: CachedRouter<R>) -> Self {
        Self { feed, router }
    }

    /// Name of the backing data source.
    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Stations with bikes available within `radius_km` of `origin`,
    /// sorted by ascending distance.
    ///
    /// An unreachable or malformed feed yields an empty list, never an
    /// error; the HTTP layer serves that as a normal "no bikes found"
    /// success response.
    pub async fn nearby_vehicles(
        &self,
        origin: Coordinates,
        radius_km: f64,
    ) -> Vec<NearbyVehicle> {
        match self.feed.snapshot().await {
            Ok(snapshot) => nearby::nearby_vehicles(&snapshot, PROVIDER_NAME, origin, radius_km),
            Err(e) => {
                tracing::warn!("station feed unavailable, returning no vehicles: {e}");
                Vec::new()
            }
        }
    }

    /// Trip distance from `origin` to `destination`.
    ///
    /// Routed when the routing service cooperates, great-circle otherwise;
    /// see [`RouteEstimate::source`] for which one it was.
    pub async fn trip_distance(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> RouteEstimate {
        self.router.trip_distance(origin, destination).await
    }
}
