//! Metrics collection and exposition.
//!
//! # Metrics
//! - `factor_requests_total` (counter): calls by method and outcome
//! - `factor_request_duration_seconds` (histogram): handling latency by method
//!
//! Recording is a no-op until an exporter is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// How a call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Descriptor,
    Result,
    Fault,
    Rejected,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Descriptor => "descriptor",
            CallOutcome::Result => "result",
            CallOutcome::Fault => "fault",
            CallOutcome::Rejected => "rejected",
        }
    }
}

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled call.
pub fn record_call(method: &str, outcome: CallOutcome, start: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "factor_requests_total",
        "method" => method.clone(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("factor_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
