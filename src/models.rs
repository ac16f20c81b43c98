//! Request and response shapes exposed by the relay.
//!
//! Everything here is built fresh per request from an upstream body and
//! dropped once the response is written.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of search hits requested upstream.
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

fn default_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}

/// Parameters of a protein search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Primary accessions in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<String>,
}

/// Simplified protein record.
///
/// `length` is the character count of `sequence` and is absent exactly when
/// `sequence` is. `go_terms` is sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinEntry {
    pub accession: String,
    pub name: Option<String>,
    pub sequence: Option<String>,
    pub length: Option<usize>,
    pub go_terms: Vec<String>,
}

/// Structures mapped to an accession. Empty when none are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureMapping {
    pub mappings: Vec<Value>,
}

/// One upstream summary record, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureSummary(pub Value);

/// Predicted structure lookup. `data` is `null` when `present` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub present: bool,
    pub data: Option<Value>,
}

impl PredictionResult {
    pub fn absent() -> Self {
        Self {
            present: false,
            data: None,
        }
    }

    pub fn found(data: Value) -> Self {
        Self {
            present: true,
            data: Some(data),
        }
    }
}
