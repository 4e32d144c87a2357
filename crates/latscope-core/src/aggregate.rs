//! Region latency aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::Dataset;
use crate::model::RegionSummary;
use crate::request::LatencyQuery;
use crate::stats;

const P95: f64 = 95.0;

/// Per-region summaries in first-occurrence order of the requested regions.
///
/// Serializes as a JSON object whose key order matches that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyReport {
    entries: Vec<(String, RegionSummary)>,
}

impl LatencyReport {
    pub fn get(&self, region: &str) -> Option<&RegionSummary> {
        self.entries
            .iter()
            .find(|(r, _)| r == region)
            .map(|(_, s)| s)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LatencyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, summary) in &self.entries {
            map.serialize_entry(region, summary)?;
        }
        map.end()
    }
}

/// Computes region summaries over a shared, read-only dataset.
#[derive(Debug, Clone)]
pub struct Aggregator {
    dataset: Arc<Dataset>,
}

impl Aggregator {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Summarize every requested region. Duplicate regions are reported once.
    pub fn summarize(&self, query: &LatencyQuery) -> LatencyReport {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::with_capacity(query.regions.len());
        for region in &query.regions {
            if seen.insert(region) {
                entries.push((region.clone(), self.summarize_region(region, query.threshold_ms)));
            }
        }
        LatencyReport { entries }
    }

    /// Summary for one region. Regions without records yield `RegionSummary::EMPTY`.
    pub fn summarize_region(&self, region: &str, threshold_ms: f64) -> RegionSummary {
        let (latencies, uptimes): (Vec<f64>, Vec<f64>) = self
            .dataset
            .region(region)
            .map(|r| (r.latency_ms, r.uptime_pct))
            .unzip();

        let (Some(avg_lat), Some(p95_lat), Some(avg_up)) = (
            stats::mean(&latencies),
            stats::percentile(&latencies, P95),
            stats::mean(&uptimes),
        ) else {
            return RegionSummary::EMPTY;
        };

        RegionSummary {
            avg_latency: stats::round2(avg_lat),
            p95_latency: stats::round2(p95_lat),
            avg_uptime: stats::round2(avg_up),
            breaches: latencies.iter().filter(|&&l| l > threshold_ms).count() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::model::LatencyRecord;

    fn record(region: &str, latency_ms: f64, uptime_pct: f64) -> LatencyRecord {
        LatencyRecord {
            region: region.into(),
            service: "svc".into(),
            latency_ms,
            uptime_pct,
            timestamp: 20250101,
        }
    }

    fn small() -> Aggregator {
        let ds = Dataset::from_records(vec![
            record("eu", 100.0, 99.0),
            record("eu", 200.0, 98.0),
            record("eu", 300.0, 97.0),
            record("us", 50.0, 100.0),
        ])
        .unwrap();
        Aggregator::new(Arc::new(ds))
    }

    #[test]
    fn summary_over_small_set() {
        let s = small().summarize_region("eu", 200.0);
        assert_eq!(s.avg_latency, 200.0);
        // rank 1.9 -> 200 + 0.9 * 100
        assert_eq!(s.p95_latency, 290.0);
        assert_eq!(s.avg_uptime, 98.0);
        // 200 == threshold is not a breach
        assert_eq!(s.breaches, 1);
    }

    #[test]
    fn unknown_region_is_zero_summary() {
        assert_eq!(small().summarize_region("apac", 1.0), RegionSummary::EMPTY);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let q = LatencyQuery::new(vec!["us".into(), "eu".into(), "us".into()], 10.0);
        let report = small().summarize(&q);
        assert_eq!(report.regions().collect::<Vec<_>>(), vec!["us", "eu"]);
        assert_eq!(report.get("us").unwrap().breaches, 1);
    }

    #[test]
    fn report_serializes_in_request_order() {
        let q = LatencyQuery::new(vec!["us".into(), "zz".into(), "eu".into()], 10.0);
        let json = serde_json::to_string(&small().summarize(&q)).unwrap();
        let us = json.find("\"us\"").unwrap();
        let zz = json.find("\"zz\"").unwrap();
        let eu = json.find("\"eu\"").unwrap();
        assert!(us < zz && zz < eu, "{json}");
        assert!(json.contains(r#""zz":{"avg_latency":0.0,"p95_latency":0.0,"avg_uptime":0.0,"breaches":0}"#));
    }
}
