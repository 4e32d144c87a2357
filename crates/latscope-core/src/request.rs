//! Decoding of `/api/latency` request bodies.
//!
//! Decode rules:
//! - body must be a JSON object; unknown fields are ignored
//! - `regions`: array of strings, absent means no regions
//! - `threshold_ms`: finite number, absent means the configured default

use serde_json::{Map, Value};

use crate::error::{Result, LatscopeError};

/// Breach threshold used when a request omits `threshold_ms`.
pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

/// A decoded latency query.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyQuery {
    /// Requested regions in caller order (duplicates preserved here).
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

impl LatencyQuery {
    pub fn new(regions: Vec<String>, threshold_ms: f64) -> Self {
        Self { regions, threshold_ms }
    }

    /// Decode a raw request body.
    pub fn from_slice(body: &[u8], default_threshold_ms: f64) -> Result<Self> {
        let v: Value = serde_json::from_slice(body)
            .map_err(|e| LatscopeError::BadRequest(format!("invalid json: {e}")))?;
        let obj = v
            .as_object()
            .ok_or_else(|| LatscopeError::BadRequest("request body must be a JSON object".into()))?;

        Ok(Self {
            regions: decode_regions(obj)?,
            threshold_ms: decode_threshold(obj, default_threshold_ms)?,
        })
    }
}

fn decode_regions(obj: &Map<String, Value>) -> Result<Vec<String>> {
    let items = match obj.get("regions") {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(LatscopeError::BadRequest(
                "regions must be an array of strings".into(),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_owned).ok_or_else(|| {
                LatscopeError::BadRequest(format!("regions[{i}] must be a string"))
            })
        })
        .collect()
}

fn decode_threshold(obj: &Map<String, Value>, default_threshold_ms: f64) -> Result<f64> {
    match obj.get("threshold_ms") {
        None => Ok(default_threshold_ms),
        Some(v) => v
            .as_f64()
            .filter(|t| t.is_finite())
            .ok_or_else(|| LatscopeError::BadRequest(format!("threshold_ms must be a number, got {v}"))),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn decode(body: &str) -> Result<LatencyQuery> {
        LatencyQuery::from_slice(body.as_bytes(), DEFAULT_THRESHOLD_MS)
    }

    #[test]
    fn absent_fields_take_defaults() {
        let q = decode("{}").unwrap();
        assert!(q.regions.is_empty());
        assert_eq!(q.threshold_ms, 180.0);
    }

    #[test]
    fn full_body_decodes_in_order() {
        let q = decode(r#"{"regions":["emea","apac","emea"],"threshold_ms":150.5,"extra":true}"#).unwrap();
        assert_eq!(q.regions, vec!["emea", "apac", "emea"]);
        assert_eq!(q.threshold_ms, 150.5);
    }

    #[test]
    fn integer_threshold_is_accepted() {
        assert_eq!(decode(r#"{"threshold_ms":200}"#).unwrap().threshold_ms, 200.0);
    }

    #[test]
    fn malformed_bodies_are_bad_requests() {
        for body in [
            "not json",
            "",
            "[1,2]",
            r#"{"regions":"apac"}"#,
            r#"{"regions":["apac",7]}"#,
            r#"{"regions":null}"#,
            r#"{"threshold_ms":"abc"}"#,
            r#"{"threshold_ms":null}"#,
        ] {
            let err = decode(body).expect_err(body);
            assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{body}");
        }
    }

    #[test]
    fn error_message_names_the_field() {
        let err = decode(r#"{"threshold_ms":"abc"}"#).unwrap_err();
        assert!(err.message().contains("threshold_ms"), "{}", err.message());
    }
}
