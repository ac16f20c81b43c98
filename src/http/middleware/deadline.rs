//! JSON body for requests cut off by the inbound deadline.
//!
//! `TimeoutLayer` answers 408 with an empty body. No handler produces 408, so
//! any 408 seen here is the deadline.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::response::ErrorBody;

pub async fn render_deadline(request: Request<Body>, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::warn!("Request exceeded the inbound deadline");
    let body = ErrorBody {
        detail: "request exceeded the inbound deadline".to_string(),
        upstream_status: None,
    };
    (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response()
}
