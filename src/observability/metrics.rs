//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): inbound requests by route, status
//! - `relay_request_duration_seconds` (histogram): inbound latency by route
//! - `relay_upstream_requests_total` (counter): outbound calls by upstream, status
//! - `relay_upstream_duration_seconds` (histogram): outbound latency by upstream
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::upstream::Upstream;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed inbound request.
pub fn record_request(route: String, status: u16, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record an outbound call. `status` is `None` when no response arrived.
pub fn record_upstream(upstream: Upstream, status: Option<u16>, start: Instant) {
    let status = status.map_or_else(|| "error".to_string(), |s| s.to_string());
    metrics::counter!(
        "relay_upstream_requests_total",
        "upstream" => upstream.label(),
        "status" => status
    )
    .increment(1);
    metrics::histogram!("relay_upstream_duration_seconds", "upstream" => upstream.label())
        .record(start.elapsed().as_secs_f64());
}
