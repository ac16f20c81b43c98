//! Predicted structures from AlphaFold DB.

use url::Url;

use crate::error::RelayResult;
use crate::models::PredictionResult;
use crate::upstream::{endpoint, Upstream, UpstreamClient};

#[derive(Debug, Clone)]
pub struct AlphaFoldService {
    client: UpstreamClient,
    base: Url,
}

impl AlphaFoldService {
    pub fn new(client: UpstreamClient, base: Url) -> Self {
        Self { client, base }
    }

    pub fn prediction_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &["prediction", accession])
    }

    /// Prediction for `accession`; a missing prediction is not an error.
    pub async fn prediction(&self, accession: &str) -> RelayResult<PredictionResult> {
        let fetched = self
            .client
            .get_json(Upstream::AlphaFold, self.prediction_url(accession))
            .await?;

        let result = fetched
            .found()
            .map_or_else(PredictionResult::absent, PredictionResult::found);
        tracing::debug!(accession, present = result.present, "AlphaFold prediction resolved");
        Ok(result)
    }
}
