//! HTTP server for the notebook

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::NotebookConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Notebook HTTP server
pub struct NotebookServer {
    config: NotebookConfig,
    state: AppState,
}

impl NotebookServer {
    /// Create a new server, loading existing uploads
    pub async fn new(config: NotebookConfig) -> Result<Self> {
        let state = AppState::new(config.clone()).await?;
        Ok(Self { config, state })
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(self.state);

        tracing::info!("Starting notebook server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Build the router with all routes
pub fn build_router(state: AppState) -> Router {
    let server = &state.config().server;
    let static_dir = state.config().storage.static_dir.clone();

    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::app_routes(server.max_upload_size))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http());

    if server.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
