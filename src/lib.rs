//! Factor Service Library
//!
//! Filters a list of integers by a divisor, exchanged as SOAP-style XML
//! envelopes over HTTP.

pub mod client;
pub mod config;
pub mod envelope;
pub mod factor;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod service;

pub use client::{ClientError, FactorClient};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use service::FactorService;
