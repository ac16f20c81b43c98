//! Protein lookups against UniProtKB.
//!
//! # Operations
//! - `search`: `GET {base}/uniprotkb/search?query=..&format=json&size=..`
//! - `entry`: `GET {base}/uniprotkb/{accession}.json`
//!
//! Upstream 404 has no special meaning here and surfaces as an upstream error.

use std::collections::BTreeSet;

use serde_json::Value;
use url::Url;

use crate::error::RelayResult;
use crate::json;
use crate::models::{ProteinEntry, SearchResult};
use crate::upstream::{endpoint, Upstream, UpstreamClient};

/// Cross-reference database tag carrying Gene Ontology annotations.
const GO_DATABASE: &str = "GO";

#[derive(Debug, Clone)]
pub struct UniProtService {
    client: UpstreamClient,
    base: Url,
}

impl UniProtService {
    pub fn new(client: UpstreamClient, base: Url) -> Self {
        Self { client, base }
    }

    pub fn search_url(&self, query: &str, limit: u32) -> Url {
        let mut url = endpoint(&self.base, &["uniprotkb", "search"]);
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("format", "json")
            .append_pair("size", &limit.to_string());
        url
    }

    pub fn entry_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &["uniprotkb", &format!("{accession}.json")])
    }

    /// Primary accessions matching `query`, in upstream order.
    pub async fn search(&self, query: &str, limit: u32) -> RelayResult<SearchResult> {
        let body = self
            .client
            .get_json(Upstream::UniProt, self.search_url(query, limit))
            .await?
            .require(Upstream::UniProt)?;

        let result = project_search(&body);
        tracing::debug!(query, limit, hits = result.results.len(), "UniProt search complete");
        Ok(result)
    }

    /// Simplified record for `accession`.
    pub async fn entry(&self, accession: &str) -> RelayResult<ProteinEntry> {
        let body = self
            .client
            .get_json(Upstream::UniProt, self.entry_url(accession))
            .await?
            .require(Upstream::UniProt)?;

        Ok(project_entry(accession, &body))
    }
}

/// Extract `primaryAccession` from every element of `results`.
///
/// Keeps upstream order and duplicates. Elements without a string accession
/// are skipped.
pub fn project_search(body: &Value) -> SearchResult {
    let results = json::lookup_array(body, &["results"])
        .map(|items| {
            items
                .iter()
                .filter_map(|item| json::lookup_str(item, &["primaryAccession"]))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    SearchResult { results }
}

/// Project a full UniProtKB record onto `ProteinEntry`.
pub fn project_entry(accession: &str, body: &Value) -> ProteinEntry {
    let sequence = json::lookup_str(body, &["sequence", "value"]).map(str::to_owned);
    let length = sequence.as_deref().map(|s| s.chars().count());
    let name = json::lookup_str(
        body,
        &["proteinDescription", "recommendedName", "fullName", "value"],
    )
    .map(str::to_owned);

    ProteinEntry {
        accession: accession.to_owned(),
        name,
        sequence,
        length,
        go_terms: go_terms(body),
    }
}

/// Every property value of every GO cross-reference, deduplicated and sorted.
fn go_terms(body: &Value) -> Vec<String> {
    let Some(xrefs) = json::lookup_array(body, &["uniProtKBCrossReferences"]) else {
        return Vec::new();
    };

    let terms: BTreeSet<&str> = xrefs
        .iter()
        .filter(|xref| json::lookup_str(xref, &["database"]) == Some(GO_DATABASE))
        .filter_map(|xref| json::lookup_array(xref, &["properties"]))
        .flatten()
        .filter_map(|property| json::lookup_str(property, &["value"]))
        .filter(|value| !value.is_empty())
        .collect();

    terms.into_iter().map(str::to_owned).collect()
}
