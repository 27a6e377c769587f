//! HTTP transport for the factor service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign x-request-id)
//!     → handler.rs (GET → descriptor, POST → FactorService, else 405)
//!     → text/xml response
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
