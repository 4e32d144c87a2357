//! In-process request metrics.
//!
//! Counters and the aggregation histogram are atomics keyed by label sets in
//! a `DashMap`, rendered in Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::{CounterVec, HistogramVec, LatscopeMetrics};
