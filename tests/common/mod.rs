//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bio_relay::config::RelayConfig;
use bio_relay::{HttpServer, Shutdown};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Accessions served by the mock search endpoint, in ranking order.
pub const SEARCH_POOL: [&str; 7] = [
    "P69905", "P68871", "P69905", "P02042", "P02100", "P09105", "P68871",
];

pub fn hemoglobin_entry() -> Value {
    json!({
        "primaryAccession": "P69905",
        "proteinDescription": {
            "recommendedName": {"fullName": {"value": "Hemoglobin subunit alpha"}}
        },
        "sequence": {"value": "MVLS", "length": 4},
        "uniProtKBCrossReferences": [
            {"database": "GO", "id": "GO:0031838", "properties": [
                {"key": "GoTerm", "value": "C:haptoglobin-hemoglobin complex"},
                {"key": "GoEvidenceType", "value": "IDA:UniProtKB"}
            ]},
            {"database": "EMBL", "id": "V00493", "properties": [
                {"key": "ProteinId", "value": "CAA23752.1"}
            ]},
            {"database": "GO", "id": "GO:0019825", "properties": [
                {"key": "GoTerm", "value": "F:oxygen binding"},
                {"key": "GoEvidenceType", "value": "IDA:UniProtKB"}
            ]}
        ]
    })
}

pub fn hemoglobin_mappings() -> Value {
    json!([
        {"pdb_id": "1a00", "chain_id": "A", "unp_start": 1, "unp_end": 141},
        {"pdb_id": "1a01", "chain_id": "C", "unp_start": 1, "unp_end": 141}
    ])
}

pub fn hemoglobin_summary() -> Value {
    json!({
        "title": "L-VAL-(ALPHA-ASP-[BETA-ASN]) HEMOGLOBIN",
        "release_date": "19980318",
        "experimental_method": ["X-ray diffraction"]
    })
}

pub fn hemoglobin_prediction() -> Value {
    json!([{
        "entryId": "AF-P69905-F1",
        "uniprotAccession": "P69905",
        "pdbUrl": "https://alphafold.ebi.ac.uk/files/AF-P69905-F1-model_v4.pdb"
    }])
}

fn upstream_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}

async fn uniprot_search(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("format").map(String::as_str) != Some("json") {
        return (StatusCode::BAD_REQUEST, "format=json required").into_response();
    }
    let size: usize = params.get("size").and_then(|s| s.parse().ok()).unwrap_or(25);
    let results: Vec<Value> = match params.get("query").map(String::as_str) {
        Some("hemoglobin") => SEARCH_POOL
            .iter()
            .take(size)
            .map(|acc| json!({"primaryAccession": acc, "entryType": "UniProtKB reviewed"}))
            .collect(),
        _ => Vec::new(),
    };
    Json(json!({ "results": results })).into_response()
}

async fn uniprot_entry(Path(file): Path<String>) -> Response {
    match file.strip_suffix(".json") {
        Some("P69905") => Json(hemoglobin_entry()).into_response(),
        Some("P00001") => Json(json!({"primaryAccession": "P00001"})).into_response(),
        _ => upstream_not_found(),
    }
}

async fn pdbe_mappings(Path(accession): Path<String>) -> Response {
    match accession.as_str() {
        "P69905" => Json(json!({"P69905": {"mappings": hemoglobin_mappings()}})).into_response(),
        "P00001" => Json(json!({})).into_response(),
        _ => upstream_not_found(),
    }
}

/// Ids are matched case-insensitively, but bodies are always keyed by the
/// lower-case id.
async fn pdbe_summary(Path(pdb_id): Path<String>) -> Response {
    match pdb_id.to_ascii_lowercase().as_str() {
        "1a00" => Json(json!({ "1a00": [hemoglobin_summary(), {"title": "SECOND"}] })).into_response(),
        "2xyz" => Json(json!({ "2xyz": [] })).into_response(),
        _ => upstream_not_found(),
    }
}

async fn alphafold_prediction(Path(accession): Path<String>) -> Response {
    match accession.as_str() {
        "P69905" => Json(hemoglobin_prediction()).into_response(),
        _ => upstream_not_found(),
    }
}

/// Start a mock serving UniProt at `/`, PDBe at `/pdbe` and AlphaFold at `/alphafold`.
pub async fn start_mock_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/uniprotkb/search", get(uniprot_search))
        .route("/uniprotkb/{file}", get(uniprot_entry))
        .route("/pdbe/mappings/uniprot/{accession}", get(pdbe_mappings))
        .route("/pdbe/pdb/entry/summary/{pdb_id}", get(pdbe_summary))
        .route("/alphafold/prediction/{accession}", get(alphafold_prediction));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Relay configuration pointing every upstream at `upstream`.
pub fn relay_config(upstream: SocketAddr) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstreams.uniprot_url = format!("http://{upstream}");
    config.upstreams.pdbe_url = format!("http://{upstream}/pdbe");
    config.upstreams.alphafold_url = format!("http://{upstream}/alphafold/");
    config.upstreams.use_system_proxy = false;
    config
}

/// Start a relay on an ephemeral port.
pub async fn start_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that never routes loopback traffic through a proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// SDK client for a relay listening at `url`.
pub fn sdk_client(url: &str) -> bio_relay_sdk::RelayClient {
    bio_relay_sdk::RelayClient::with_client(url, http_client())
}

/// Start a programmable raw-TCP upstream on an ephemeral port.
///
/// `f` produces the status code and body of every response.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut request = [0u8; 4096];
                        let _ = socket.read(&mut request).await;
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
