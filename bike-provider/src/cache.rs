//! Time-bounded cache over the station feed.
//!
//! The feed describes a single upstream dataset, so the cache is one slot:
//! `Empty` or `Fresh(snapshot, expires_at)`. A read before expiry returns
//! the stored snapshot with no network access; a read at or after expiry
//! refreshes synchronously and replaces the whole snapshot, never merging
//! piecewise, so info and status stay the matched pair they were fetched as.
//!
//! Concurrent callers that observe an expired slot may both refresh. The
//! refresh is an idempotent GET, so the race costs a duplicate upstream
//! call, not correctness, and no lock is held across the fetch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::FeedSnapshot;
use crate::gbfs::{FeedError, StationFeed};

/// Default snapshot TTL: 5 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Configuration for the feed cache.
#[derive(Debug, Clone)]
pub struct FeedCacheConfig {
    /// How long a snapshot stays fresh.
    pub ttl: Duration,
}

impl FeedCacheConfig {
    /// Create a config with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl Default for FeedCacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

struct Slot {
    snapshot: Arc<FeedSnapshot>,
    expires_at: Instant,
}

/// A station feed with a single-slot TTL cache in front of it.
pub struct CachedFeed<F> {
    feed: F,
    ttl: Duration,
    slot: RwLock<Option<Slot>>,
}

impl<F: StationFeed> CachedFeed<F> {
    /// Wrap a feed with the given cache configuration.
    pub fn new(feed: F, config: &FeedCacheConfig) -> Self {
        Self {
            feed,
            ttl: config.ttl,
            slot: RwLock::new(None),
        }
    }

    /// Get the current snapshot, refreshing from upstream if the slot is
    /// empty or expired.
    ///
    /// A failed refresh leaves the slot untouched and propagates the error:
    /// expired data is never served, so past one TTL window a broken
    /// upstream degrades to "no data" at the facade.
    pub async fn snapshot(&self) -> Result<Arc<FeedSnapshot>, FeedError> {
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }

        let snapshot = Arc::new(self.feed.fetch_snapshot().await?);
        tracing::debug!(
            stations = snapshot.info.len(),
            "station feed snapshot refreshed"
        );

        let mut slot = self.slot.write().await;
        *slot = Some(Slot {
            snapshot: Arc::clone(&snapshot),
            expires_at: Instant::now() + self.ttl,
        });

        Ok(snapshot)
    }

    async fn fresh(&self) -> Option<Arc<FeedSnapshot>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|s| Instant::now() < s.expires_at)
            .map(|s| Arc::clone(&s.snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, StationId, StationInfo};
    use crate::gbfs::MockFeed;

    fn snapshot_with_one_station() -> FeedSnapshot {
        FeedSnapshot {
            info: vec![StationInfo {
                id: StationId::from("1"),
                name: "Hucisko".to_string(),
                location: Coordinates::new(54.3494, 18.6448),
            }],
            status: vec![],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fresh_read_hits_cache() {
        let feed = MockFeed::new(snapshot_with_one_station());
        let cached = CachedFeed::new(feed.clone(), &FeedCacheConfig::default());

        let first = cached.snapshot().await.unwrap();
        let second = cached.snapshot().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_read_refetches_once() {
        let feed = MockFeed::new(snapshot_with_one_station());
        let cached = CachedFeed::new(feed.clone(), &FeedCacheConfig::default());

        cached.snapshot().await.unwrap();
        tokio::time::advance(DEFAULT_TTL).await;

        let refreshed = cached.snapshot().await.unwrap();
        assert_eq!(feed.fetch_count(), 2);
        assert_eq!(refreshed.info.len(), 1);

        // The refreshed slot is fresh again.
        cached.snapshot().await.unwrap();
        assert_eq!(feed.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn read_just_before_expiry_is_fresh() {
        let feed = MockFeed::new(snapshot_with_one_station());
        let cached = CachedFeed::new(feed.clone(), &FeedCacheConfig::default());

        cached.snapshot().await.unwrap();
        tokio::time::advance(DEFAULT_TTL - Duration::from_millis(1)).await;

        cached.snapshot().await.unwrap();
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_propagates_and_slot_recovers() {
        let feed = MockFeed::new(snapshot_with_one_station());
        feed.set_failing(true);
        let cached = CachedFeed::new(feed.clone(), &FeedCacheConfig::default());

        assert!(cached.snapshot().await.is_err());

        feed.set_failing(false);
        let snapshot = cached.snapshot().await.unwrap();
        assert_eq!(snapshot.info.len(), 1);
        assert_eq!(feed.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_data_is_not_served_when_refresh_fails() {
        let feed = MockFeed::new(snapshot_with_one_station());
        let cached = CachedFeed::new(feed.clone(), &FeedCacheConfig::default());

        cached.snapshot().await.unwrap();
        tokio::time::advance(DEFAULT_TTL).await;
        feed.set_failing(true);

        assert!(cached.snapshot().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_ttl_is_respected() {
        let feed = MockFeed::new(snapshot_with_one_station());
        let config = FeedCacheConfig::new(Duration::from_secs(10));
        let cached = CachedFeed::new(feed.clone(), &config);

        cached.snapshot().await.unwrap();
        tokio::time::advance(Duration::from_secs(9)).await;
        cached.snapshot().await.unwrap();
        assert_eq!(feed.fetch_count(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        cached.snapshot().await.unwrap();
        assert_eq!(feed.fetch_count(), 2);
    }
}
