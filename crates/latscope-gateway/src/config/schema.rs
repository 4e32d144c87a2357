use std::net::SocketAddr;

use serde::Deserialize;
use latscope_core::error::{Result, LatscopeError};
use latscope_core::request::DEFAULT_THRESHOLD_MS;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub aggregator: AggregatorSection,

    #[serde(default)]
    pub dataset: DatasetSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            aggregator: AggregatorSection::default(),
            dataset: DatasetSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LatscopeError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.aggregator.validate()?;
        self.dataset.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1..=16 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(LatscopeError::BadRequest(
                "server.max_body_bytes must be between 1 and 16777216".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            LatscopeError::BadRequest(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregatorSection {
    #[serde(default = "default_threshold_ms")]
    pub default_threshold_ms: f64,
}

impl Default for AggregatorSection {
    fn default() -> Self {
        Self {
            default_threshold_ms: default_threshold_ms(),
        }
    }
}

impl AggregatorSection {
    pub fn validate(&self) -> Result<()> {
        if !self.default_threshold_ms.is_finite() || self.default_threshold_ms < 0.0 {
            return Err(LatscopeError::BadRequest(
                "aggregator.default_threshold_ms must be a finite number >= 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_threshold_ms() -> f64 {
    DEFAULT_THRESHOLD_MS
}

/// Where the record set comes from. No path means the built-in sample.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    #[serde(default)]
    pub path: Option<String>,
}

impl DatasetSection {
    pub fn validate(&self) -> Result<()> {
        if matches!(self.path.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(LatscopeError::BadRequest("dataset.path must not be empty".into()));
        }
        Ok(())
    }
}
