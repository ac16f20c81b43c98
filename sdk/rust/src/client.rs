use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinEntry {
    pub accession: String,
    pub name: Option<String>,
    pub sequence: Option<String>,
    pub length: Option<usize>,
    pub go_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingsResponse {
    pub mappings: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub present: bool,
    pub data: Option<Value>, // Upstream payload, passed through untouched
}

pub struct RelayClient {
    client: Client,
    relay_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            client: Client::new(),
            relay_url: relay_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use a preconfigured HTTP client (proxy, TLS, timeouts).
    pub fn with_client(relay_url: &str, client: Client) -> Self {
        Self {
            client,
            relay_url: relay_url.trim_end_matches('/').to_string(),
        }
    }

    /// Primary accessions matching a UniProtKB query.
    pub async fn search(&self, query: &str, limit: u32) -> Result<SearchResponse, Box<dyn std::error::Error>> {
        let limit = limit.to_string();
        self.get_json("/uniprot/search", &[("query", query), ("limit", limit.as_str())]).await
    }

    /// Simplified UniProtKB entry.
    pub async fn entry(&self, accession: &str) -> Result<ProteinEntry, Box<dyn std::error::Error>> {
        self.get_json("/uniprot/entry", &[("accession", accession)]).await
    }

    /// PDB structures mapped to an accession (empty when none).
    pub async fn mappings(&self, accession: &str) -> Result<MappingsResponse, Box<dyn std::error::Error>> {
        self.get_json("/pdb/search_by_uniprot", &[("accession", accession)]).await
    }

    /// PDBe summary record, verbatim.
    pub async fn summary(&self, pdb_id: &str) -> Result<Value, Box<dyn std::error::Error>> {
        self.get_json("/pdb/summary", &[("pdb_id", pdb_id)]).await
    }

    /// AlphaFold prediction lookup.
    pub async fn prediction(&self, accession: &str) -> Result<PredictionResponse, Box<dyn std::error::Error>> {
        self.get_json("/af/prediction", &[("accession", accession)]).await
    }

    /// Raw GET against the relay, for callers that inspect status codes.
    pub async fn raw_get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.relay_url, path))
            .query(query)
            .send()
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Box<dyn std::error::Error>> {
        let resp = self.raw_get(path, query).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Relay returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<T>(&text) {
            Ok(body) => Ok(body),
            Err(e) => Err(e.into()),
        }
    }
}
