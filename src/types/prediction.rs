//! Prediction results returned to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Version reported when the server does not send one.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Metadata attached by the client to every successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// ISO-8601 time at which the response was processed.
    pub processing_time: String,
    pub api_version: String,
    pub request_id: String,
}

/// A successful classification.
///
/// The server's JSON object is kept verbatim in `body`; the client does not
/// require `prediction`, `confidence` or `probabilities` to be present or well
/// formed. Use the accessors to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(flatten)]
    pub body: Map<String, Value>,
    pub metadata: ResponseMetadata,
}

impl Prediction {
    /// Predicted class label.
    pub fn label(&self) -> Option<&str> {
        self.body.get("prediction").and_then(|v| v.as_str())
    }

    pub fn confidence(&self) -> Option<f64> {
        self.body.get("confidence").and_then(|v| v.as_f64())
    }

    /// Per-label probabilities. Non-numeric entries are skipped.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.body
            .get("probabilities")
            .and_then(|v| v.as_object())
            .map(|m| {
                m.iter()
                    .filter_map(|(k, v)| v.as_f64().map(|p| (k.clone(), p)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Probabilities ordered from most to least likely.
    pub fn ranked_probabilities(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self.probabilities().into_iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Confidence as a percentage with one decimal, e.g. `"87.0%"`.
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence().map(|c| format!("{:.1}%", c * 100.0))
    }

    /// The full object as the caller sees it: server fields plus `metadata`.
    pub fn to_json(&self) -> Value {
        let mut obj = self.body.clone();
        obj.insert(
            "metadata".to_string(),
            serde_json::to_value(&self.metadata).unwrap_or(Value::Null),
        );
        Value::Object(obj)
    }
}

/// Outcome of one `predict` call: exactly one of success or failure.
///
/// Serializes as `{"status": "success" | "failure", "result": ...}`. The server
/// object stays nested under `result`, so its own keys never shadow the tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum PredictionResult {
    Success(Prediction),
    Failure { message: String },
}

impl PredictionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Success(p) => Some(p),
            Self::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }

    pub fn into_result(self) -> std::result::Result<Prediction, String> {
        match self {
            Self::Success(p) => Ok(p),
            Self::Failure { message } => Err(message),
        }
    }
}

/// Body of the `/health` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
