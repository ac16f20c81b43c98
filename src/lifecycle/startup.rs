//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the shared upstream client and the per-upstream services
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listeners start last (traffic only when ready)

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::config::{validate_config, ConfigError, RelayConfig};
use crate::http::server::AppState;
use crate::services::{AlphaFoldService, PdbeService, UniProtService};
use crate::upstream::UpstreamClient;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid upstream URL '{url}': {source}")]
    UpstreamUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build handler state from a configuration.
pub fn build_state(config: &RelayConfig) -> Result<AppState, StartupError> {
    validate_config(config).map_err(|errors| StartupError::Config(ConfigError::Validation(errors)))?;

    let upstreams = &config.upstreams;
    let client = UpstreamClient::new(&config.timeouts, upstreams.use_system_proxy)?;

    let state = AppState {
        uniprot: Arc::new(UniProtService::new(client.clone(), parse_base(&upstreams.uniprot_url)?)),
        pdbe: Arc::new(PdbeService::new(client.clone(), parse_base(&upstreams.pdbe_url)?)),
        alphafold: Arc::new(AlphaFoldService::new(client, parse_base(&upstreams.alphafold_url)?)),
    };

    tracing::debug!(
        uniprot = %upstreams.uniprot_url,
        pdbe = %upstreams.pdbe_url,
        alphafold = %upstreams.alphafold_url,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Upstream services initialized"
    );
    Ok(state)
}

fn parse_base(raw: &str) -> Result<Url, StartupError> {
    Url::parse(raw).map_err(|source| StartupError::UpstreamUrl {
        url: raw.to_string(),
        source,
    })
}
