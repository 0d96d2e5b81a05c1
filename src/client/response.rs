//! Response validation and normalization.

use crate::types::{iso_timestamp, Prediction, ResponseMetadata, DEFAULT_API_VERSION};
use crate::{Error, ErrorContext, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Parse a success body and attach client metadata.
///
/// Any JSON object is accepted; its fields are not checked. Arrays and other
/// JSON values are rejected. A `metadata` key sent by the server is replaced.
pub(crate) fn normalize_response(body: &str, now: DateTime<Utc>) -> Result<Prediction> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        Error::invalid_response_with_context(
            "response body is not valid JSON",
            ErrorContext::new()
                .with_field_path("response.body")
                .with_details(e.to_string())
                .with_source("response_normalizer"),
        )
    })?;

    let mut body = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::invalid_response_with_context(
                "response body is not a JSON object",
                ErrorContext::new()
                    .with_field_path("response.body")
                    .with_details(json_kind(&other))
                    .with_source("response_normalizer"),
            ))
        }
    };

    let api_version =
        scalar_string(body.get("version")).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
    let request_id = scalar_string(body.get("request_id")).unwrap_or_else(generate_request_id);
    body.remove("metadata");

    Ok(Prediction {
        body,
        metadata: ResponseMetadata {
            processing_time: iso_timestamp(now),
            api_version,
            request_id,
        },
    })
}

/// Fresh opaque request id.
pub(crate) fn generate_request_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn scalar_string(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
