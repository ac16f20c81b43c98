//! HTTP relay for public bioinformatics services.
//!
//! Five read-only endpoints each make one call to UniProtKB, PDBe or
//! AlphaFold DB and reshape the upstream JSON into a smaller document.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ http::server (request id, trace, timeout, metrics)
//!                 │
//!                 ▼
//!              http::handlers ──▶ services::{uniprot, pdbe, alphafold}
//!                                        │            │
//!                                        │            ▼
//!                                        │      upstream::client ──▶ UniProt / PDBe / AlphaFold
//!                                        ▼
//!                                   project_* (field extraction)
//! ```
//!
//! Nothing is shared between requests except the upstream connection pool.

pub mod config;
pub mod error;
pub mod http;
pub mod json;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod services;
pub mod upstream;

pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
