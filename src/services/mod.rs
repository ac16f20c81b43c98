//! Relay operations, one module per upstream.
//!
//! # Data Flow
//! ```text
//! handler (validated params)
//!     → service operation (build endpoint URL)
//!     → UpstreamClient::get_json (one GET)
//!     → project_* (pure field extraction)
//!     → model returned to the handler
//! ```
//!
//! The `project_*` functions hold the normalization rules and never touch
//! the network.

pub mod alphafold;
pub mod pdbe;
pub mod uniprot;

pub use alphafold::AlphaFoldService;
pub use pdbe::PdbeService;
pub use uniprot::UniProtService;
