//! Immutable latency record set.
//!
//! The set is built once at startup (built-in sample or a JSON file) and is
//! only ever read afterwards. The gateway shares it behind an `Arc`.

use std::fs;

use crate::error::{Result, LatscopeError};
use crate::model::LatencyRecord;

// (region, service, latency_ms, uptime_pct, timestamp)
const SAMPLE: [(&str, &str, f64, f64, u32); 36] = [
    ("apac", "support", 171.74, 97.333, 20250301),
    ("apac", "recommendations", 167.29, 98.243, 20250302),
    ("apac", "support", 206.7, 99.241, 20250303),
    ("apac", "payments", 138.0, 97.256, 20250304),
    ("apac", "payments", 137.3, 97.989, 20250305),
    ("apac", "payments", 159.36, 97.745, 20250306),
    ("apac", "recommendations", 202.2, 98.167, 20250307),
    ("apac", "payments", 193.05, 98.208, 20250308),
    ("apac", "payments", 127.12, 98.661, 20250309),
    ("apac", "catalog", 195.79, 98.019, 20250310),
    ("apac", "support", 191.53, 99.388, 20250311),
    ("apac", "recommendations", 147.93, 98.718, 20250312),
    ("emea", "checkout", 161.68, 99.192, 20250301),
    ("emea", "recommendations", 180.39, 99.185, 20250302),
    ("emea", "analytics", 181.25, 97.536, 20250303),
    ("emea", "support", 196.47, 97.169, 20250304),
    ("emea", "checkout", 197.38, 97.379, 20250305),
    ("emea", "analytics", 169.23, 97.994, 20250306),
    ("emea", "support", 155.01, 97.999, 20250307),
    ("emea", "support", 146.09, 97.804, 20250308),
    ("emea", "support", 199.56, 97.694, 20250309),
    ("emea", "payments", 141.73, 99.065, 20250310),
    ("emea", "catalog", 113.63, 97.614, 20250311),
    ("emea", "checkout", 205.7, 99.444, 20250312),
    ("amer", "payments", 194.81, 98.546, 20250301),
    ("amer", "checkout", 188.59, 97.471, 20250302),
    ("amer", "payments", 107.39, 99.131, 20250303),
    ("amer", "recommendations", 164.61, 97.373, 20250304),
    ("amer", "analytics", 175.12, 97.521, 20250305),
    ("amer", "payments", 149.61, 99.094, 20250306),
    ("amer", "payments", 149.59, 97.389, 20250307),
    ("amer", "analytics", 185.96, 99.408, 20250308),
    ("amer", "support", 204.2, 98.589, 20250309),
    ("amer", "checkout", 151.49, 97.227, 20250310),
    ("amer", "analytics", 186.22, 99.392, 20250311),
    ("amer", "catalog", 208.78, 98.855, 20250312),
];

/// Read-only table of latency records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LatencyRecord>,
}

impl Dataset {
    /// The built-in 36-record sample (apac, emea, amer).
    pub fn builtin() -> Self {
        let records = SAMPLE
            .iter()
            .map(|&(region, service, latency_ms, uptime_pct, timestamp)| LatencyRecord {
                region: region.to_string(),
                service: service.to_string(),
                latency_ms,
                uptime_pct,
                timestamp,
            })
            .collect();
        Self { records }
    }

    /// Build from already-parsed records, rejecting unusable rows.
    pub fn from_records(records: Vec<LatencyRecord>) -> Result<Self> {
        for (i, r) in records.iter().enumerate() {
            if r.region.is_empty() {
                return Err(LatscopeError::BadRequest(format!(
                    "record {i}: region must not be empty"
                )));
            }
            if !r.latency_ms.is_finite() || !r.uptime_pct.is_finite() {
                return Err(LatscopeError::BadRequest(format!(
                    "record {i} ({}): latency_ms and uptime_pct must be finite",
                    r.region
                )));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<LatencyRecord> = serde_json::from_str(s)
            .map_err(|e| LatscopeError::BadRequest(format!("invalid dataset json: {e}")))?;
        Self::from_records(records)
    }

    /// Load a JSON array of records from disk.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let s = fs::read_to_string(path)
            .map_err(|e| LatscopeError::Internal(format!("read dataset failed ({path}): {e}")))?;
        let ds = Self::from_json_str(&s)?;
        tracing::info!(path, records = ds.len(), "dataset loaded from file");
        Ok(ds)
    }

    pub fn records(&self) -> &[LatencyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to `region`, in table order.
    pub fn region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a LatencyRecord> + 'a {
        self.records.iter().filter(move |r| r.region == region)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}
