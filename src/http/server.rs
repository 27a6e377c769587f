//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the service path
//! - Wire up middleware (request ID, tracing, timeout, panic capture)
//! - Bind server to listener
//! - Stop gracefully on the shutdown signal

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware::map_response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handler::{describe, method_not_allowed, panic_fault, process, timeout_fault};
use crate::http::request::{request_id, UuidRequestId};
use crate::lifecycle::shutdown;
use crate::service::FactorService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: FactorService,
    pub max_body_size: usize,
}

/// HTTP server for the factor service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            service: FactorService::new(&config.service.public_url),
            max_body_size: config.listener.max_body_size,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let endpoint = get(describe).post(process).fallback(method_not_allowed);

        Router::new()
            .route(&config.service.path, endpoint)
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_fault))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(map_response(timeout_fault))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            path = %self.config.service.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
