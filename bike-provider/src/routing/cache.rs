//! Memoizing router with great-circle fallback.
//!
//! Routed distance comes from an external service, so lookups are cached
//! per directed coordinate pair. Fallback results are cached under the
//! same key as routed ones: a flapping routing upstream then costs at most
//! one failed call per pair per TTL window instead of a retry storm.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use serde::Serialize;

use crate::domain::Coordinates;
use crate::geo;

use super::RouteBackend;

/// Default TTL for a memoized route: 10 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Default maximum number of memoized coordinate pairs.
const DEFAULT_MAX_CAPACITY: u64 = 500;

/// Configuration for the route-distance cache.
#[derive(Debug, Clone)]
pub struct RouteCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries; least-recently-used entries are
    /// evicted once the bound is reached.
    pub max_capacity: u64,
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Where a trip-distance figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Road distance from the routing service.
    Road,
    /// Straight-line fallback; the routing service was unavailable.
    GreatCircle,
}

/// Trip distance with provenance.
///
/// The facade always returns one of these: callers see a single success
/// value either way, and `source` records whether it was degraded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    /// Driving duration; absent when the figure is a great-circle fallback.
    pub duration_hours: Option<f64>,
    pub source: RouteSource,
}

/// A route backend with a memo cache and an unconditional fallback.
pub struct CachedRouter<R> {
    backend: R,
    routes: MokaCache<String, RouteEstimate>,
}

impl<R: RouteBackend> CachedRouter<R> {
    /// Wrap a backend with the given cache configuration.
    pub fn new(backend: R, config: &RouteCacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { backend, routes }
    }

    /// Trip distance from `from` to `to`.
    ///
    /// Returns the memoized routed distance when available; on a cache miss
    /// queries the backend, and on any backend failure falls back silently
    /// to the great-circle distance with no duration. Never fails.
    pub async fn trip_distance(&self, from: Coordinates, to: Coordinates) -> RouteEstimate {
        let key = route_key(from, to);

        if let Some(cached) = self.routes.get(&key).await {
            return cached;
        }

        let estimate = match self.backend.route(from, to).await {
            Ok(leg) => RouteEstimate {
                distance_km: leg.distance_km,
                duration_hours: Some(leg.duration_hours),
                source: RouteSource::Road,
            },
            Err(e) => {
                tracing::warn!("road routing unavailable, using great-circle distance: {e}");
                RouteEstimate {
                    distance_km: geo::great_circle_km(from, to),
                    duration_hours: None,
                    source: RouteSource::GreatCircle,
                }
            }
        };

        self.routes.insert(key, estimate).await;
        estimate
    }

    /// Number of memoized routes (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}

/// Order-sensitive cache key for a directed coordinate pair.
///
/// A→B and B→A are distinct keys: road routes are not symmetric.
fn route_key(from: Coordinates, to: Coordinates) -> String {
    format!(
        "{:.6},{:.6};{:.6},{:.6}",
        from.latitude, from.longitude, to.latitude, to.longitude
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::super::{RouteLeg, RoutingError};
    use super::*;

    /// Backend returning a distance derived from the call direction, or
    /// failing outright, with a call counter.
    #[derive(Clone)]
    struct ScriptedBackend {
        failing: bool,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedBackend {
        fn ok() -> Self {
            Self {
                failing: false,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                failing: true,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RouteBackend for ScriptedBackend {
        fn route(
            &self,
            from: Coordinates,
            _to: Coordinates,
        ) -> impl std::future::Future<Output = Result<RouteLeg, RoutingError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.failing {
                Err(RoutingError::Api {
                    status: 503,
                    message: "scripted failure".to_string(),
                })
            } else {
                // Encode the direction in the result so cross-contamination
                // between A→B and B→A is detectable.
                Ok(RouteLeg {
                    distance_km: from.latitude,
                    duration_hours: 0.5,
                })
            };
            async move { result }
        }
    }

    fn gdansk() -> Coordinates {
        Coordinates::new(54.3520, 18.6466)
    }

    fn sopot() -> Coordinates {
        Coordinates::new(54.4416, 18.5601)
    }

    #[tokio::test]
    async fn memoizes_routed_lookups() {
        let backend = ScriptedBackend::ok();
        let router = CachedRouter::new(backend.clone(), &RouteCacheConfig::default());

        let first = router.trip_distance(gdansk(), sopot()).await;
        let second = router.trip_distance(gdansk(), sopot()).await;

        assert_eq!(first, second);
        assert_eq!(first.source, RouteSource::Road);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn directions_are_cached_independently() {
        let backend = ScriptedBackend::ok();
        let router = CachedRouter::new(backend.clone(), &RouteCacheConfig::default());

        let forward = router.trip_distance(gdansk(), sopot()).await;
        let reverse = router.trip_distance(sopot(), gdansk()).await;

        // ScriptedBackend encodes the origin latitude in the distance.
        assert_eq!(forward.distance_km, gdansk().latitude);
        assert_eq!(reverse.distance_km, sopot().latitude);
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn failure_falls_back_to_great_circle() {
        let backend = ScriptedBackend::failing();
        let router = CachedRouter::new(backend.clone(), &RouteCacheConfig::default());

        let estimate = router.trip_distance(gdansk(), sopot()).await;

        assert_eq!(estimate.source, RouteSource::GreatCircle);
        assert_eq!(estimate.duration_hours, None);
        assert_eq!(
            estimate.distance_km,
            geo::great_circle_km(gdansk(), sopot())
        );
    }

    #[tokio::test]
    async fn fallback_results_are_cached_too() {
        let backend = ScriptedBackend::failing();
        let router = CachedRouter::new(backend.clone(), &RouteCacheConfig::default());

        router.trip_distance(gdansk(), sopot()).await;
        router.trip_distance(gdansk(), sopot()).await;

        assert_eq!(backend.calls(), 1);
    }

    #[test]
    fn route_key_is_order_sensitive() {
        let forward = route_key(gdansk(), sopot());
        let reverse = route_key(sopot(), gdansk());
        assert_ne!(forward, reverse);
    }

    #[test]
    fn route_key_is_stable_for_equal_inputs() {
        assert_eq!(route_key(gdansk(), sopot()), route_key(gdansk(), sopot()));
    }
}
