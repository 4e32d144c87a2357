//! Record and summary types.

use serde::{Deserialize, Serialize};

/// One latency/uptime observation for a service in a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatencyRecord {
    pub region: String,
    pub service: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
    /// Date encoded as YYYYMMDD.
    pub timestamp: u32,
}

/// Per-region statistics computed for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RegionSummary {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionSummary {
    /// Summary reported for a region with no matching records.
    pub const EMPTY: RegionSummary = RegionSummary {
        avg_latency: 0.0,
        p95_latency: 0.0,
        avg_uptime: 0.0,
        breaches: 0,
    };
}
