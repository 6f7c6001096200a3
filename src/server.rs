use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::{self, AppState};
use crate::config::Config;

/// Binds the configured address and serves the API until Ctrl+C.
#[tracing::instrument(skip_all, fields(host = %config.host, port = config.port))]
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let app = api::router(AppState::new(config.service_version.clone()));

    info!(
        address = %listener.local_addr()?,
        version = %config.service_version,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C, shutting down");
        return;
    }
    info!("Shutdown signal received");
}
