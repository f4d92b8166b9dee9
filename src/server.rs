//! HTTP server startup and shutdown.
//!
//! [`serve`] builds the shared state, binds the listener, and runs the router until
//! Ctrl-C. The note store lives exactly as long as this call.

use anyhow::{Context, Result};

use crate::api::{create_router, AppState};
use crate::config::JotboardConfig;

/// Start the notes API and block until shutdown.
pub async fn serve(config: JotboardConfig) -> Result<()> {
    config.validate()?;
    let bind_addr = config.bind_addr();

    tracing::info!(
        addr = %bind_addr,
        capacity = config.store.capacity,
        "starting jotboard"
    );

    let state = AppState::new(config.store);
    let router = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}/api/notes");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let discarded = state.store.lock().map(|s| s.len()).unwrap_or(0);
    tracing::info!(discarded, "jotboard shut down, in-memory notes discarded");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
