//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handlers
//! - Wire up middleware (tracing, CORS/preflight)
//! - Own the shared state (attempt tracker, video catalog)
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::MockConfig;
use crate::dispatch::{self, AttemptTracker, VideoCatalog};
use crate::http::middleware::cors;

/// Application state injected into handlers.
///
/// Explicitly owned rather than process-global, so each test server gets
/// its own counter table.
#[derive(Clone)]
pub struct AppState {
    pub attempts: Arc<AttemptTracker>,
    pub catalog: VideoCatalog,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AttemptTracker::new()),
            catalog: VideoCatalog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server for the video mock.
pub struct HttpServer {
    router: Router,
    config: MockConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        let state = AppState::new();
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The route is method-agnostic: only `OPTIONS` is special-cased (in
    /// the CORS layer, before routing), everything else runs the dispatch
    /// logic. Unknown paths land in the fallback.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/video/{id}", any(dispatch::video_request))
            .fallback(dispatch::invalid_endpoint)
            .with_state(state)
            .layer(middleware::from_fn(cors::cors_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured_port = self.config.listener.port,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
