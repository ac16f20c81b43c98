//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Base URLs of the proxied services.
    pub upstreams: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:9001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:9001".to_string(),
        }
    }
}

/// Upstream service base URLs.
///
/// Each operation appends its own path segments, so a base may carry a path
/// prefix of its own (e.g. `https://www.ebi.ac.uk/pdbe/api`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// UniProtKB REST base.
    pub uniprot_url: String,

    /// PDBe REST API base.
    pub pdbe_url: String,

    /// AlphaFold DB API base.
    pub alphafold_url: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for outbound calls.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            uniprot_url: "https://rest.uniprot.org".to_string(),
            pdbe_url: "https://www.ebi.ac.uk/pdbe/api".to_string(),
            alphafold_url: "https://alphafold.ebi.ac.uk/api".to_string(),
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Upstream connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Upper bound on a single upstream call (connect, headers and body).
    pub upstream_secs: u64,

    /// Inbound request deadline, enforced on the whole handler.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            upstream_secs: 30,
            request_secs: 35,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9091".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_services() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9001");
        assert_eq!(config.upstreams.uniprot_url, "https://rest.uniprot.org");
        assert_eq!(config.upstreams.pdbe_url, "https://www.ebi.ac.uk/pdbe/api");
        assert_eq!(config.upstreams.alphafold_url, "https://alphafold.ebi.ac.uk/api");
        assert_eq!(config.timeouts.upstream_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [timeouts]
            upstream_secs = 10

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.timeouts.upstream_secs, 10);
        assert_eq!(config.timeouts.connect_secs, 5);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9001");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result: Result<RelayConfig, _> = toml::from_str(
            r#"
            [observability]
            log_format = "xml"
            "#,
        );
        assert!(result.is_err());
    }
}
