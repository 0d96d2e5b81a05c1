//! Failure taxonomy for prediction calls.
//!
//! Every failure that `predict` can produce is classified into one of these
//! codes, and each code owns the exact message shown to the user. All of them
//! are terminal: the client never retries.
//!
//! | Code                   | Trigger                                   |
//! |------------------------|-------------------------------------------|
//! | `PayloadTooLarge`      | HTTP 413                                  |
//! | `UnsupportedMediaType` | HTTP 415                                  |
//! | `ServerError`          | HTTP 500                                  |
//! | `EndpointNotFound`     | HTTP 404                                  |
//! | `OtherStatus(s)`       | any other non-2xx status                  |
//! | `InvalidResponse`      | 2xx body that is not a JSON object        |
//! | `Connection`           | transport failed before any response      |
//! | `MissingImage`         | candidate carried no bytes                |
//! | `Unexpected`           | anything else                             |
//!
//! ## Example
//!
//! ```rust
//! use scanix_client::error_code::PredictionErrorCode;
//!
//! let code = PredictionErrorCode::from_status(404);
//! assert_eq!(code.name(), "endpoint_not_found");
//! assert_eq!(
//!     code.message(),
//!     "Prediction endpoint not found. Please check the API URL."
//! );
//! ```

use std::fmt;

pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "File too large. Please upload a smaller image.";
pub const UNSUPPORTED_MEDIA_TYPE_MESSAGE: &str = "Unsupported file format. Please use JPEG or PNG.";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";
pub const ENDPOINT_NOT_FOUND_MESSAGE: &str =
    "Prediction endpoint not found. Please check the API URL.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response format from server";
pub const CONNECTION_MESSAGE: &str = "Failed to connect to the prediction service. Please check if the backend server is running and the API URL is correct.";
pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image first";
pub const UNEXPECTED_MESSAGE: &str = "Failed to analyze image.";

/// Classified prediction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionErrorCode {
    /// HTTP 413: the server refused the upload size
    PayloadTooLarge,
    /// HTTP 415: the server refused the media type
    UnsupportedMediaType,
    /// HTTP 500
    ServerError,
    /// HTTP 404: usually a misconfigured base URL
    EndpointNotFound,
    /// Any other non-success status
    OtherStatus(u16),
    /// Success status, but the body is not a JSON object
    InvalidResponse,
    /// The request never reached the server
    Connection,
    /// The candidate had no content; no request was issued
    MissingImage,
    /// Could not be classified
    Unexpected,
}

impl PredictionErrorCode {
    /// Maps a non-success HTTP status to its code.
    pub fn from_status(status: u16) -> Self {
        match status {
            413 => Self::PayloadTooLarge,
            415 => Self::UnsupportedMediaType,
            500 => Self::ServerError,
            404 => Self::EndpointNotFound,
            other => Self::OtherStatus(other),
        }
    }

    /// Returns the snake_case name used in logs.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PayloadTooLarge => "payload_too_large",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::ServerError => "server_error",
            Self::EndpointNotFound => "endpoint_not_found",
            Self::OtherStatus(_) => "other_status",
            Self::InvalidResponse => "invalid_response",
            Self::Connection => "connection",
            Self::MissingImage => "missing_image",
            Self::Unexpected => "unexpected",
        }
    }

    /// HTTP status behind this code, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::PayloadTooLarge => Some(413),
            Self::UnsupportedMediaType => Some(415),
            Self::ServerError => Some(500),
            Self::EndpointNotFound => Some(404),
            Self::OtherStatus(s) => Some(*s),
            _ => None,
        }
    }

    /// The user-facing message for this code.
    pub fn message(&self) -> String {
        match self {
            Self::PayloadTooLarge => PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            Self::UnsupportedMediaType => UNSUPPORTED_MEDIA_TYPE_MESSAGE.to_string(),
            Self::ServerError => SERVER_ERROR_MESSAGE.to_string(),
            Self::EndpointNotFound => ENDPOINT_NOT_FOUND_MESSAGE.to_string(),
            Self::OtherStatus(s) => format!("Server error: {}", s),
            Self::InvalidResponse => INVALID_RESPONSE_MESSAGE.to_string(),
            Self::Connection => CONNECTION_MESSAGE.to_string(),
            Self::MissingImage => MISSING_IMAGE_MESSAGE.to_string(),
            Self::Unexpected => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for PredictionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OtherStatus(s) => write!(f, "{}({})", self.name(), s),
            _ => write!(f, "{}", self.name()),
        }
    }
}
