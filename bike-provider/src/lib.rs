//! Nearby shared-bike retrieval for a CO₂-savings calculator.
//!
//! Answers two questions for the web layer that wraps it: "which MEVO
//! stations near this point have bikes right now?" and "how far is this
//! trip by road?". Live data comes from the MEVO GBFS feed, cached with a
//! TTL; trip distance comes from OSRM, memoized per coordinate pair and
//! falling back to great-circle distance whenever routing is unavailable.
//!
//! Neither upstream can take the service down: feed trouble degrades to an
//! empty station list and routing trouble to straight-line distance, both
//! logged rather than raised. See [`provider::MevoProvider`] for the
//! public surface.

pub mod cache;
pub mod co2;
pub mod domain;
pub mod gbfs;
pub mod geo;
pub mod nearby;
pub mod provider;
pub mod routing;
