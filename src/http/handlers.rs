//! Inbound endpoints.
//!
//! Each handler checks its parameters, delegates to one service operation and
//! lets `RelayError` render failures.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{RelayError, RelayResult};
use crate::http::response::ErrorBody;
use crate::http::server::AppState;
use crate::models::{
    PredictionResult, ProteinEntry, SearchQuery, SearchResult, StructureMapping, StructureSummary,
};

#[derive(Debug, Deserialize)]
pub struct AccessionParams {
    pub accession: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub pdb_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Reject blank identifiers before they reach an upstream URL.
///
/// Non-blank values pass through unchanged.
fn required<'a>(name: &str, value: &'a str) -> RelayResult<&'a str> {
    if value.trim().is_empty() {
        return Err(RelayError::BadRequest(format!("{name} must not be empty")));
    }
    Ok(value)
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> RelayResult<Json<SearchResult>> {
    let query = required("query", &params.query)?;
    if params.limit == 0 {
        return Err(RelayError::BadRequest("limit must be a positive count".to_string()));
    }
    state.uniprot.search(query, params.limit).await.map(Json)
}

pub async fn entry(
    State(state): State<AppState>,
    Query(params): Query<AccessionParams>,
) -> RelayResult<Json<ProteinEntry>> {
    let accession = required("accession", &params.accession)?;
    state.uniprot.entry(accession).await.map(Json)
}

pub async fn mappings(
    State(state): State<AppState>,
    Query(params): Query<AccessionParams>,
) -> RelayResult<Json<StructureMapping>> {
    let accession = required("accession", &params.accession)?;
    state.pdbe.mappings(accession).await.map(Json)
}

pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> RelayResult<Json<StructureSummary>> {
    let pdb_id = required("pdb_id", &params.pdb_id)?;
    state.pdbe.summary(pdb_id).await.map(Json)
}

pub async fn prediction(
    State(state): State<AppState>,
    Query(params): Query<AccessionParams>,
) -> RelayResult<Json<PredictionResult>> {
    let accession = required("accession", &params.accession)?;
    state.alphafold.prediction(accession).await.map(Json)
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found".to_string(),
            upstream_status: None,
        }),
    )
}
