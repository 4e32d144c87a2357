//! latscope gateway library entry.
//!
//! Wires config, the shared dataset/aggregator state, the HTTP handlers, the
//! CORS layer, and the metrics registry into an axum router. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod cors;
pub mod obs;
pub mod ops;
pub mod router;
