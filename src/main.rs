//! Flaky Video-API Mock Server
//!
//! An HTTP mock server built with Tokio and Axum that simulates a flaky
//! upstream video-delivery API for exercising client retry/backoff logic.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 VIDEO MOCK                    │
//!                      │                                               │
//!     Client Request   │  ┌─────────┐    ┌──────────┐    ┌──────────┐ │
//!     ─────────────────┼─▶│  http   │───▶│   cors   │───▶│ dispatch │ │
//!                      │  │ server  │    │middleware│    │ handler  │ │
//!                      │  └─────────┘    └──────────┘    └────┬─────┘ │
//!                      │                                      │       │
//!                      │                            ┌─────────▼─────┐ │
//!                      │                            │ attempt table │ │
//!     Client Response  │                            │ video catalog │ │
//!     ◀────────────────┼────────────────────────────┴───────────────┘ │
//!                      │                                               │
//!                      │  Cross-cutting: config (PORT env), tracing    │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! Behavior per video endpoint: the first two requests answer 202 "retry
//! later", the third and every later one answers 307 to a fixed download
//! URL. `forceError=429` and `forceError=404` override the flow without
//! touching the attempt counter.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_mock::config::MockConfig;
use video_mock::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "video_mock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("video-mock v0.1.0 starting");

    let config = MockConfig::from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        port = config.listener.port,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
