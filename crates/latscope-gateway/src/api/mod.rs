//! `/api/latency` handlers.
//!
//! - `POST`    : decode body, summarize regions, 200 with the report
//! - `OPTIONS` : CORS preflight, 204
//!
//! Every decode failure is a 400 `{"error": ...}`. CORS headers are added by
//! the router-level layer in `crate::cors`.

pub mod error;

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;

use latscope_core::LatencyQuery;

use crate::app_state::AppState;
pub use error::ApiError;

pub async fn latency(State(app): State<AppState>, body: Bytes) -> Response {
    let metrics = app.metrics();

    let query = match LatencyQuery::from_slice(&body, app.default_threshold_ms()) {
        Ok(q) => q,
        Err(e) => {
            tracing::warn!(error = %e, body_len = body.len(), "latency request rejected");
            metrics.requests.inc(&[("outcome", "bad_request")]);
            return ApiError::from(e).into_response();
        }
    };

    tracing::debug!(
        regions = query.regions.len(),
        threshold_ms = query.threshold_ms,
        "latency request"
    );

    let started = Instant::now();
    let report = app.aggregator().summarize(&query);
    metrics.aggregate_duration.observe(&[], started.elapsed());
    metrics.regions_requested.add(&[], report.len() as u64);
    metrics.requests.inc(&[("outcome", "ok")]);

    (StatusCode::OK, Json(report)).into_response()
}

pub async fn preflight(State(app): State<AppState>) -> Response {
    app.metrics().requests.inc(&[("outcome", "preflight")]);
    (StatusCode::NO_CONTENT, Json(json!({}))).into_response()
}
