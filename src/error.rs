use crate::error_code::PredictionErrorCode;
use thiserror::Error;

/// Structured error context for logging and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or configuration key that caused the error (e.g., "candidate.content", "response.body")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., a truncated response body)
    pub details: Option<String>,
    /// Source of the error (e.g., "prediction_client", "health_check")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the prediction client.
///
/// Callers of [`crate::PredictionClient::predict`] never see this type: it is
/// folded into a [`crate::PredictionResult::Failure`] at the call boundary.
/// Lower-level helpers such as `health()` return it directly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote error: HTTP {status}")]
    Remote { status: u16, body: Option<String> },

    #[error("Invalid response: {message}{}", format_context(.context))]
    InvalidResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("{message}")]
    Unknown {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new invalid-response error with structured context
    pub fn invalid_response_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidResponse {
            message: msg.into(),
            context,
        }
    }

    /// Create a new unknown error with structured context
    pub fn unknown_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Unknown {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::InvalidResponse { context, .. }
            | Error::Unknown { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Classify this error into the user-facing taxonomy.
    pub fn code(&self) -> PredictionErrorCode {
        match self {
            Error::Remote { status, .. } => PredictionErrorCode::from_status(*status),
            Error::InvalidResponse { .. } | Error::Serialization(_) => {
                PredictionErrorCode::InvalidResponse
            }
            Error::Validation { .. } => PredictionErrorCode::MissingImage,
            Error::Transport(e) if crate::client::is_connectivity_failure(e) => {
                PredictionErrorCode::Connection
            }
            _ => PredictionErrorCode::Unexpected,
        }
    }

    /// The message a user should see for this error.
    ///
    /// Classified errors use the fixed guidance string of their code; anything
    /// unexpected surfaces its own message (or a generic fallback when empty).
    pub fn user_message(&self) -> String {
        match self.code() {
            PredictionErrorCode::Unexpected => {
                let own = match self {
                    Error::Unknown { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                if own.trim().is_empty() {
                    PredictionErrorCode::Unexpected.message()
                } else {
                    own
                }
            }
            code => code.message(),
        }
    }
}
