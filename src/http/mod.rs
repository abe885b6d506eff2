//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, state wiring, graceful shutdown)
//!     → middleware/cors.rs (preflight short-circuit, CORS on everything)
//!     → dispatch handlers (attempt tracking, forced errors, redirect)
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
