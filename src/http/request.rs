//! Request identification and tracing spans.
//!
//! # Responsibilities
//! - Name the request-id header shared by the id layers
//! - Build the per-request span carrying method, path and request id
//!
//! # Design Decisions
//! - Request ID assigned as early as possible (outermost layer) so every
//!   event inside the handler and the upstream client carries it
//! - A caller-supplied `x-request-id` is kept and echoed back

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

/// Header carrying the request id in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request id of an inbound request, or `"unknown"` before assignment.
pub fn request_id(req: &Request<Body>) -> &str {
    req.headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span factory for `TraceLayer`.
pub fn make_request_span(req: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id(req),
    )
}
