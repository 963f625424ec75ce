//! GBFS station feed client.
//!
//! This module talks to the MEVO bike-share feed: two JSON documents under
//! one base URL, `station_information.json` (static descriptors) and
//! `station_status.json` (live availability). A snapshot fetch pulls both
//! concurrently so info and status always form a matched pair.
//!
//! Schema deviations are fetch failures, never panics: the wire DTOs in
//! [`types`] require every field the provider consumes, and a document that
//! doesn't match surfaces as [`FeedError::Json`].

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::FeedSnapshot;

pub use client::{GbfsClient, GbfsConfig};
pub use error::FeedError;
pub use mock::MockFeed;
pub use types::{StationInformationFeed, StationStatusFeed};

/// Source of station feed snapshots.
///
/// The cache and facade are generic over this so tests can substitute
/// [`MockFeed`] for the real [`GbfsClient`].
pub trait StationFeed: Send + Sync {
    /// Fetch one complete feed pull (information + status).
    fn fetch_snapshot(&self) -> impl Future<Output = Result<FeedSnapshot, FeedError>> + Send;
}
