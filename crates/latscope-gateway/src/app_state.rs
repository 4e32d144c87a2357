//! Shared application state for the latscope gateway.
//!
//! The dataset is loaded once here and shared read-only behind an `Arc`;
//! handlers only ever read it.

use std::sync::Arc;

use latscope_core::error::Result;
use latscope_core::{Aggregator, Dataset};

use crate::config::GatewayConfig;
use crate::obs::LatscopeMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<LatscopeMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    aggregator: Aggregator,
}

impl AppState {
    /// Build application state, loading the dataset named by the config.
    /// Returns Result so main can report a bad dataset instead of panicking.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let dataset = match cfg.dataset.path.as_deref() {
            Some(path) => Dataset::load_from_file(path)?,
            None => Dataset::builtin(),
        };
        Ok(Self::with_dataset(cfg, dataset))
    }

    /// Build application state over an explicit dataset.
    pub fn with_dataset(cfg: GatewayConfig, dataset: Dataset) -> Self {
        if dataset.is_empty() {
            tracing::warn!("dataset is empty; every region will report zeros");
        }
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                aggregator: Aggregator::new(Arc::new(dataset)),
            }),
            metrics: Arc::new(LatscopeMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.inner.aggregator
    }

    pub fn default_threshold_ms(&self) -> f64 {
        self.inner.cfg.aggregator.default_threshold_ms
    }

    pub fn metrics(&self) -> Arc<LatscopeMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Gauge lines appended to the `/metrics` output.
    pub fn metrics_gauges(&self) -> Vec<(&'static str, u64)> {
        vec![(
            "latscope_dataset_records",
            self.inner.aggregator.dataset().len() as u64,
        )]
    }
}
