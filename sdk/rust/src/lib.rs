//! Typed async client for a running bio-relay.

pub mod client;

pub use client::{
    MappingsResponse, PredictionResponse, ProteinEntry, RelayClient, SearchResponse,
};
