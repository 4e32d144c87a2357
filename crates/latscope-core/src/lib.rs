//! latscope core: latency records, region statistics, and the shared error type.
//!
//! This crate holds the dataset model, the statistics primitives, and the
//! region aggregator used by the gateway. It carries no transport or runtime
//! dependencies so the aggregation can be exercised directly from tests and
//! tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `LatscopeError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod model;
pub mod request;
pub mod stats;

/// Shared result type.
pub use error::{Result, LatscopeError};
pub use aggregate::{Aggregator, LatencyReport};
pub use dataset::Dataset;
pub use model::{LatencyRecord, RegionSummary};
pub use request::LatencyQuery;
