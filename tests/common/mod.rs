//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use video_mock::config::MockConfig;
use video_mock::http::HttpServer;

/// Start a mock server on an ephemeral port and return its address.
///
/// Each call gets a fresh attempt-counter table, so tests cannot leak
/// state into each other.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(MockConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Client that does not follow redirects, so 307s stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
