use crate::client::builder::PredictionClientBuilder;
use crate::client::response::normalize_response;
use crate::config::{join_url, ClientConfig};
use crate::types::{
    iso_timestamp, HealthStatus, Prediction, PredictionRequest, PredictionResult, UploadCandidate,
};
use crate::{Error, ErrorContext, Result};
use chrono::Utc;
use reqwest::header::ACCEPT;
use tracing::{debug, info, warn};

pub const PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/health";

/// Client for the remote prediction service.
///
/// Holds no per-call state: every [`predict`](Self::predict) builds its own
/// request, so one client can serve concurrent calls, which complete in any
/// order.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn builder() -> PredictionClientBuilder {
        PredictionClientBuilder::new()
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        PredictionClientBuilder::from_config(config).build()
    }

    pub(crate) fn from_parts(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_endpoint(&self) -> String {
        join_url(&self.base_url, PREDICT_PATH)
    }

    /// Submit one image and resolve to exactly one success or failure.
    ///
    /// Never returns an error: every failure path becomes a
    /// [`PredictionResult::Failure`] carrying a message fit for display.
    pub async fn predict(&self, candidate: &UploadCandidate) -> PredictionResult {
        match self.execute(candidate).await {
            Ok(prediction) => PredictionResult::Success(prediction),
            Err(e) => {
                let code = e.code();
                warn!(code = %code, error = %e, "prediction call failed");
                PredictionResult::failure(e.user_message())
            }
        }
    }

    /// The fallible pipeline behind [`predict`](Self::predict).
    pub async fn execute(&self, candidate: &UploadCandidate) -> Result<Prediction> {
        if candidate.is_empty() {
            return Err(Error::validation_with_context(
                "no image content to submit",
                ErrorContext::new()
                    .with_field_path("candidate.content")
                    .with_source("prediction_client"),
            ));
        }

        let url = self.predict_endpoint();
        info!(
            url = %url,
            filename = candidate.filename(),
            size_mb = %candidate.size_mb(),
            selected_at = %iso_timestamp(candidate.selected_at()),
            "sending prediction request"
        );

        let form = PredictionRequest::from_candidate(candidate, Utc::now()).into_form()?;
        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the body is only logged.
            let body = response.text().await.ok();
            warn!(
                status = status.as_u16(),
                body = body.as_deref().unwrap_or(""),
                "prediction API returned an error status"
            );
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let prediction = normalize_response(&body, Utc::now())?;
        debug!(
            request_id = %prediction.metadata.request_id,
            label = ?prediction.label(),
            confidence = ?prediction.confidence(),
            "prediction response received"
        );
        Ok(prediction)
    }

    /// Query the backend health route.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = join_url(&self.base_url, HEALTH_PATH);
        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                body: Some(body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// One-shot prediction against `base_url` (or the default local address).
///
/// Builds a throwaway client; prefer a long-lived [`PredictionClient`] when
/// submitting repeatedly.
pub async fn predict(candidate: &UploadCandidate, base_url: Option<&str>) -> PredictionResult {
    let mut builder = PredictionClient::builder();
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    match builder.build() {
        Ok(client) => client.predict(candidate).await,
        Err(e) => PredictionResult::failure(e.user_message()),
    }
}
