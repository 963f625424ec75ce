//! In-memory station feed for tests and development.
//!
//! Mimics [`GbfsClient`](super::GbfsClient) through the [`StationFeed`]
//! trait, with a programmable snapshot, a switchable failure mode, and a
//! fetch counter so cache behaviour can be asserted precisely.

use std::sync::{Arc, Mutex};

use crate::domain::FeedSnapshot;

use super::StationFeed;
use super::error::FeedError;

struct MockFeedState {
    snapshot: FeedSnapshot,
    failing: bool,
    fetches: usize,
}

/// A station feed backed by a snapshot set from the test.
#[derive(Clone)]
pub struct MockFeed {
    state: Arc<Mutex<MockFeedState>>,
}

impl MockFeed {
    /// Create a feed that serves the given snapshot.
    pub fn new(snapshot: FeedSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockFeedState {
                snapshot,
                failing: false,
                fetches: 0,
            })),
        }
    }

    /// Replace the snapshot served by subsequent fetches.
    pub fn set_snapshot(&self, snapshot: FeedSnapshot) {
        self.state.lock().unwrap().snapshot = snapshot;
    }

    /// Make subsequent fetches fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Number of fetches performed so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetches
    }
}

impl StationFeed for MockFeed {
    fn fetch_snapshot(
        &self,
    ) -> impl std::future::Future<Output = Result<FeedSnapshot, FeedError>> + Send {
        let result = {
            let mut state = self.state.lock().unwrap();
            state.fetches += 1;
            if state.failing {
                Err(FeedError::Api {
                    status: 503,
                    message: "mock feed failure".to_string(),
                })
            } else {
                Ok(state.snapshot.clone())
            }
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_snapshot_and_counts_fetches() {
        let feed = MockFeed::new(FeedSnapshot::default());
        assert_eq!(feed.fetch_count(), 0);

        let snapshot = feed.fetch_snapshot().await.unwrap();
        assert!(snapshot.info.is_empty());
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failure_mode_is_switchable() {
        let feed = MockFeed::new(FeedSnapshot::default());
        feed.set_failing(true);
        assert!(feed.fetch_snapshot().await.is_err());

        feed.set_failing(false);
        assert!(feed.fetch_snapshot().await.is_ok());
        assert_eq!(feed.fetch_count(), 2);
    }
}
