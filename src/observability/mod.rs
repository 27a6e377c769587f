//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http handlers produce:
//!     → logging.rs (structured log events, per-request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID is attached to every request span
//! - Metrics exporter is optional and off by default

pub mod logging;
pub mod metrics;
