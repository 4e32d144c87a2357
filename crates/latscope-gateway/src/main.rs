//! latscope gateway binary.
//!
//! Serves `POST /api/latency` (region latency summaries over the loaded
//! dataset) plus `/healthz` and `/metrics`. Config path comes from
//! `LATSCOPE_CONFIG` (default `latscope.yaml`, optional).

use tracing_subscriber::{fmt, EnvFilter};

use latscope_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("LATSCOPE_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let records = state.aggregator().dataset().len();
    let app = router::build_router(state);

    tracing::info!(%listen, records, "latscope-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
