//! Liveness endpoint for external uptime probes.
//!
//! One GET route, no auth, no coupling to bot state: supervisors only need
//! to see that the process is up.

use axum::Router;
use axum::routing::get;
use tracing::info;

/// Static payload uptime monitors look for.
const LIVENESS_BODY: &str = "Bot is running";

/// Binds the liveness route on `0.0.0.0:{port}` and serves it until the
/// process exits.
pub async fn run_health_server(port: u16) -> std::io::Result<()> {
    let app = router();
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(address = %addr, "Health server started");

    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new().route("/", get(liveness))
}

/// Always responds 200 while the process is running.
async fn liveness() -> &'static str {
    LIVENESS_BODY
}
