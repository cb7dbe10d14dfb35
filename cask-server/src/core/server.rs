//! HTTP server lifecycle.

use std::net::SocketAddr;

use tracing::info;

use crate::api;
use crate::utils::{AppError, AppResult};

use super::{Config, ServerState};

/// Owns the listener and the assembled application.
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Reuse state built elsewhere (startup builds it once to fail fast on
    /// a bad data file, then hands it in here).
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Bind and serve until ctrl-c.
    pub async fn run(self) -> AppResult<()> {
        let state = match self.state {
            Some(state) => state,
            None => ServerState::initialize(&self.config).await?,
        };

        let app = api::build_app(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to bind {addr}: {e}")))?;

        info!("🥃 Cask API listening on http://{addr}");
        info!(environment = %self.config.environment, "server ready");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("server error: {e}")))?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutdown signal received, draining connections");
}
