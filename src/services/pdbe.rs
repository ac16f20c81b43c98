//! Structure mappings and entry summaries from PDBe.
//!
//! The two operations have different absence semantics: an accession with no
//! mapped structures is an empty success, a PDB id with no summary is
//! `NotFound`.

use serde_json::Value;
use url::Url;

use crate::error::{RelayError, RelayResult};
use crate::json;
use crate::models::{StructureMapping, StructureSummary};
use crate::upstream::{endpoint, Fetched, Upstream, UpstreamClient};

#[derive(Debug, Clone)]
pub struct PdbeService {
    client: UpstreamClient,
    base: Url,
}

impl PdbeService {
    pub fn new(client: UpstreamClient, base: Url) -> Self {
        Self { client, base }
    }

    pub fn mappings_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &["mappings", "uniprot", accession])
    }

    pub fn summary_url(&self, pdb_id: &str) -> Url {
        endpoint(&self.base, &["pdb", "entry", "summary", pdb_id])
    }

    /// PDB structures mapped to a UniProt accession.
    pub async fn mappings(&self, accession: &str) -> RelayResult<StructureMapping> {
        let fetched = self
            .client
            .get_json(Upstream::Pdbe, self.mappings_url(accession))
            .await?;

        let mapping = match fetched {
            Fetched::Found(body) => project_mappings(accession, &body),
            Fetched::NotFound => StructureMapping { mappings: Vec::new() },
        };
        tracing::debug!(accession, count = mapping.mappings.len(), "PDBe mappings resolved");
        Ok(mapping)
    }

    /// Summary record of a PDB entry.
    pub async fn summary(&self, pdb_id: &str) -> RelayResult<StructureSummary> {
        let fetched = self
            .client
            .get_json(Upstream::Pdbe, self.summary_url(pdb_id))
            .await?;

        match fetched {
            Fetched::Found(body) => project_summary(pdb_id, &body),
            Fetched::NotFound => Err(RelayError::NotFound("PDB ID not found".to_string())),
        }
    }
}

/// The `mappings` array under the accession key, or empty.
pub fn project_mappings(accession: &str, body: &Value) -> StructureMapping {
    let mappings = json::lookup_array(body, &[accession, "mappings"])
        .cloned()
        .unwrap_or_default();
    StructureMapping { mappings }
}

/// First record listed under the PDB id key, matched exactly as given.
pub fn project_summary(pdb_id: &str, body: &Value) -> RelayResult<StructureSummary> {
    json::lookup_array(body, &[pdb_id])
        .and_then(|items| items.first())
        .cloned()
        .map(StructureSummary)
        .ok_or_else(|| RelayError::NotFound("No summary for pdb_id".to_string()))
}
