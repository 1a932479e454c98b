//! HTTP server bootstrap

use axum::Router;
use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    error::{ApiError, ApiResult},
    routes,
    state::AppState,
};

/// The MOA Finder HTTP server
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a server with validated configuration
    pub fn new(config: ServerConfig, state: AppState) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self { config, state })
    }

    /// The router this server serves
    pub fn router(&self) -> Router {
        routes::app(self.state.clone())
    }

    /// Bind and serve until Ctrl+C
    pub async fn run(self) -> ApiResult<()> {
        let bind_addr = self.config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to bind {bind_addr}: {e}")))?;

        tracing::info!(
            addr = %bind_addr,
            shops = self.state.directory().len(),
            "MOA Finder API listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {e}")))?;

        tracing::info!("MOA Finder API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
