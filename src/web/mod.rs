//! # HTTP Surface
//!
//! Router construction and the server loop. The probe contract lives in
//! [`handlers::health`]; this module only wires it to a listener.

pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use handlers::health::readiness_probe;
use state::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/readyz", get(readiness_probe))
        .with_state(state)
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn serve(state: AppState) -> Result<()> {
    let bind_address = state.config.http.bind_address.clone();
    let app = create_router(state);

    let listener = TcpListener::bind(&bind_address).await?;
    info!(bind_address = %bind_address, "Readiness endpoint listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, draining in-flight probes");
    }
}
