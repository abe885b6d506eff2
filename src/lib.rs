//! Flaky Video-API Mock Server Library

pub mod config;
pub mod dispatch;
pub mod http;

pub use config::MockConfig;
pub use http::HttpServer;
