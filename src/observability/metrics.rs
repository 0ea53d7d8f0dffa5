//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by outcome
//!   (`preflight`, `invalid`, `transport_error`, `relayed`)
//! - `relay_upstream_duration_seconds` (histogram): outbound call latency by
//!   outcome (`transport_error`, `relayed`); requests that never reach the
//!   upstream are not recorded

use std::net::SocketAddr;
use std::time::Duration;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count a finished request.
pub fn record_request(outcome: &'static str) {
    counter!("relay_requests_total", "outcome" => outcome).increment(1);
}

/// Record how long the outbound call took.
pub fn record_upstream(outcome: &'static str, elapsed: Duration) {
    histogram!("relay_upstream_duration_seconds", "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}
