//! Axum router wiring.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, cors, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().server.max_body_bytes;

    Router::new()
        .route("/api/latency", post(api::latency).options(api::preflight))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::map_response(cors::apply))
        .with_state(state)
}
