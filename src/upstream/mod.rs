//! Outbound calls to the proxied services.
//!
//! # Data Flow
//! ```text
//! service operation
//!     → endpoint URL (base + path segments, percent-encoded)
//!     → client.rs (one GET, bounded wait)
//!     → Fetched::Found(json) | Fetched::NotFound | RelayError
//! ```
//!
//! # Design Decisions
//! - One shared `reqwest::Client`; the connection pool is the only shared resource
//! - 404 is reported as data, callers decide whether absence is an error
//! - No retries

pub mod client;

use std::fmt;

use url::Url;

pub use client::{Fetched, UpstreamClient};

/// The external services the relay fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    UniProt,
    Pdbe,
    AlphaFold,
}

impl Upstream {
    /// Stable lowercase label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Upstream::UniProt => "uniprot",
            Upstream::Pdbe => "pdbe",
            Upstream::AlphaFold => "alphafold",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Upstream::UniProt => "UniProt",
            Upstream::Pdbe => "PDBe",
            Upstream::AlphaFold => "AlphaFold",
        };
        f.write_str(name)
    }
}

/// Append path segments to a base URL, percent-encoding each one.
///
/// A trailing slash on the base is ignored so `http://host/api` and
/// `http://host/api/` produce the same endpoint.
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
