//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use latscope_core::error::{Result, LatscopeError};

pub use schema::{AggregatorSection, DatasetSection, GatewayConfig, ServerSection};

/// Config path used when `LATSCOPE_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "latscope.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LatscopeError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| LatscopeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    if Path::new(path).exists() {
        return load_from_file(path);
    }
    tracing::info!(path, "config file not found, using defaults");
    let cfg = GatewayConfig::default();
    cfg.validate()?;
    Ok(cfg)
}
