//! Shared HTTP client for upstream calls with timeout and error mapping.
//!
//! # Responsibilities
//! - Issue a single GET per operation with a fixed upper bound on the wait
//! - Report 404 as `Fetched::NotFound` instead of failing
//! - Classify transport, status and decoding failures into `RelayError`
//! - Record per-upstream metrics

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::config::TimeoutConfig;
use crate::error::{RelayError, RelayResult};
use crate::observability::metrics;
use crate::upstream::Upstream;

/// Outcome of a successful round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// 2xx with a JSON body.
    Found(Value),
    /// The upstream answered 404.
    NotFound,
}

impl Fetched {
    /// Treat 404 as an ordinary upstream failure.
    ///
    /// Used by operations for which absence has no special meaning.
    pub fn require(self, upstream: Upstream) -> RelayResult<Value> {
        match self {
            Fetched::Found(body) => Ok(body),
            Fetched::NotFound => Err(RelayError::UpstreamError {
                upstream,
                status: StatusCode::NOT_FOUND.as_u16(),
            }),
        }
    }

    pub fn found(self) -> Option<Value> {
        match self {
            Fetched::Found(body) => Some(body),
            Fetched::NotFound => None,
        }
    }
}

/// Upstream HTTP client. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build a client enforcing the configured connect and total timeouts.
    pub fn new(config: &TimeoutConfig, use_system_proxy: bool) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.upstream_secs);
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_secs))
            .timeout(timeout)
            .user_agent(concat!("bio-relay/", env!("CARGO_PKG_VERSION")));
        if !use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self { http, timeout })
    }

    /// GET `url` and decode the JSON body.
    pub async fn get_json(&self, upstream: Upstream, url: Url) -> RelayResult<Fetched> {
        let start = Instant::now();
        tracing::debug!(upstream = %upstream, url = %url, "Calling upstream");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::record_upstream(upstream, None, start);
                return Err(self.classify(upstream, e));
            }
        };

        let status = response.status();
        metrics::record_upstream(upstream, Some(status.as_u16()), start);

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(upstream = %upstream, "Upstream reported not found");
            return Ok(Fetched::NotFound);
        }

        if !status.is_success() {
            tracing::warn!(
                upstream = %upstream,
                status = status.as_u16(),
                "Upstream returned error status"
            );
            return Err(RelayError::UpstreamError {
                upstream,
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| self.classify(upstream, e))?;

        tracing::debug!(
            upstream = %upstream,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream call complete"
        );
        Ok(Fetched::Found(body))
    }

    fn classify(&self, upstream: Upstream, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            tracing::warn!(upstream = %upstream, timeout = ?self.timeout, "Upstream timed out");
            RelayError::UpstreamUnavailable {
                upstream,
                timed_out: true,
                reason: format!("no response within {}s", self.timeout.as_secs()),
            }
        } else if err.is_decode() {
            tracing::warn!(upstream = %upstream, error = %err, "Upstream body is not JSON");
            RelayError::InvalidResponse {
                upstream,
                reason: err.to_string(),
            }
        } else {
            tracing::error!(upstream = %upstream, error = %err, "Upstream transport error");
            RelayError::UpstreamUnavailable {
                upstream,
                timed_out: false,
                reason: err.to_string(),
            }
        }
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("timeout_secs", &self.timeout.as_secs())
            .finish()
    }
}
