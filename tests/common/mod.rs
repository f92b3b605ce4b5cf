//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

use trip_planner::config::AppConfig;
use trip_planner::http::HttpServer;
use trip_planner::lifecycle::Shutdown;

/// Start the backend on an ephemeral port with default configuration.
///
/// Returns the bound address and the shutdown handle that stops the server;
/// waits until `/api/ping` answers so tests never race startup.
pub async fn start_backend() -> (SocketAddr, Shutdown) {
    start_backend_with_config(AppConfig::default()).await
}

/// Start the backend with a specific configuration (bind address ignored;
/// an ephemeral port is always used).
#[allow(dead_code)]
pub async fn start_backend_with_config(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://{}/api/ping", addr))
            .send()
            .await
            .is_ok()
        {
            return (addr, shutdown);
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("backend did not become ready on {}", addr);
}
