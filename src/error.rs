//! Request-level error taxonomy.
//!
//! `NotFound` is the only domain-level absence that surfaces as an error.
//! Missing mappings and missing predictions are ordinary successes and never
//! reach this type.

use thiserror::Error;

use crate::upstream::Upstream;

/// Errors surfaced to callers of the relay operations.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream call timed out or the transport failed.
    #[error("{upstream} unavailable: {reason}")]
    UpstreamUnavailable {
        upstream: Upstream,
        timed_out: bool,
        reason: String,
    },

    /// The upstream answered with a non-2xx status that is not special-cased.
    #[error("{upstream} returned HTTP {status}")]
    UpstreamError { upstream: Upstream, status: u16 },

    /// The upstream answered 2xx but the body was not JSON.
    #[error("{upstream} returned an unreadable body: {reason}")]
    InvalidResponse { upstream: Upstream, reason: String },

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller supplied unusable parameters.
    #[error("invalid request: {0}")]
    BadRequest(String),
}

impl RelayError {
    /// Upstream status to report alongside the error, when one was received.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            RelayError::UpstreamError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
