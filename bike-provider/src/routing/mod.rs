//! Road-routing client and route-distance memoization.
//!
//! Road distance is a better proxy for a car trip than straight-line
//! distance, but the routing dependency must never take the primary
//! feature down with it: every failure path ends in a great-circle
//! fallback inside [`CachedRouter`], and the facade never sees an error.

mod cache;
mod client;
mod error;

use std::future::Future;

use crate::domain::Coordinates;

pub use cache::{CachedRouter, RouteCacheConfig, RouteEstimate, RouteSource};
pub use client::{OsrmClient, OsrmConfig, RouteLeg};
pub use error::RoutingError;

/// Source of routed distances.
///
/// [`CachedRouter`] is generic over this so tests can substitute scripted
/// backends for the real [`OsrmClient`].
pub trait RouteBackend: Send + Sync {
    /// Compute the driving route between two points.
    fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> impl Future<Output = Result<RouteLeg, RoutingError>> + Send;
}
