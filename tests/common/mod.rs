//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use factor_service::config::ServiceConfig;
use factor_service::http::HttpServer;
use factor_service::lifecycle::Shutdown;

/// A server running on an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Full URL of the service path.
    pub fn url(&self) -> String {
        format!("http://{}/factorservice", self.addr)
    }
}

/// Start the service with `config` on 127.0.0.1 and a free port.
#[allow(dead_code)]
pub async fn start_server(mut config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();
    config.service.public_url = format!("http://{}{}", addr, config.service.path);

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, rx).await });

    TestServer { addr, shutdown, handle }
}

/// Start the service with default settings.
#[allow(dead_code)]
pub async fn start_default_server() -> TestServer {
    start_server(ServiceConfig::default()).await
}

/// A reqwest client that never pools or proxies.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
