//! # Types Module
//!
//! Data types flowing through a prediction call.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`UploadCandidate`] | Image selected by the user, not yet submitted |
//! | [`PredictionRequest`] | Wire form of one upload, built at call time |
//! | [`PredictionResult`] | Success or failure of one call |
//! | [`Prediction`] | Server response plus client-attached metadata |
//! | [`ResponseMetadata`] | Processing time, API version, request id |
//! | [`HealthStatus`] | Body of the backend health route |
//!
//! ## Example
//!
//! ```rust
//! use scanix_client::types::{PredictionResult, UploadCandidate};
//!
//! let candidate = UploadCandidate::new("scan.png", "image/png", vec![0u8; 16]);
//! assert_eq!(candidate.size(), 16);
//!
//! let result = PredictionResult::failure("Server error: 502");
//! assert_eq!(result.error_message(), Some("Server error: 502"));
//! ```

pub mod candidate;
pub mod prediction;
pub mod request;

pub use candidate::UploadCandidate;
pub use prediction::{
    HealthStatus, Prediction, PredictionResult, ResponseMetadata, DEFAULT_API_VERSION,
};
pub use request::PredictionRequest;

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
