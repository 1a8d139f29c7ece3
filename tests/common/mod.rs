//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use edge_utils::{HttpServer, ServiceConfig, Shutdown};

/// Start the service on an ephemeral loopback port.
///
/// Returns the bound address and the shutdown handle that stops it.
pub async fn start_server(trusted_headers: &[&str]) -> (SocketAddr, Shutdown) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.client_ip.trusted_headers = trusted_headers.iter().map(|s| s.to_string()).collect();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; give the accept loop a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// A client that never routes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Fetch `/ip` with the given request headers and return the reported address.
pub async fn fetch_ip(addr: SocketAddr, headers: &[(&str, &str)]) -> String {
    let mut request = client().get(format!("http://{}/ip", addr));
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let res = request.send().await.expect("Service unreachable");
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    body["ip"].as_str().unwrap().to_string()
}
