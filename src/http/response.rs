//! Error responses.
//!
//! # Status mapping
//! - Upstream timeout → 504 Gateway Timeout
//! - Upstream transport failure, error status, unreadable body → 502 Bad Gateway
//! - Domain absence (`NotFound`) → 404
//! - Bad parameters → 400
//!
//! Bodies are `{"detail": "..."}` with `upstream_status` when one was received.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::RelayError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UpstreamUnavailable { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamUnavailable { .. }
            | RelayError::UpstreamError { .. }
            | RelayError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::info!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            detail: self.to_string(),
            upstream_status: self.upstream_status(),
        };
        (status, Json(body)).into_response()
    }
}
