//! # scanix-client
//!
//! Client runtime for the Scanix brain-scan classification service.
//!
//! ## Overview
//!
//! The crate submits one MRI image to a remote inference API and turns
//! whatever comes back into a value a front end can display directly:
//! either a [`Prediction`] (label, confidence, per-class probabilities and
//! client-attached metadata) or a failure message. Callers never handle
//! errors themselves; [`PredictionClient::predict`] always resolves to a
//! [`PredictionResult`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scanix_client::{ClientConfig, PredictionClient, PredictionResult, UploadCandidate};
//!
//! #[tokio::main]
//! async fn main() -> scanix_client::Result<()> {
//!     let client = PredictionClient::from_config(&ClientConfig::from_env())?;
//!     let candidate = UploadCandidate::from_path("scan.jpg")?;
//!
//!     match client.predict(&candidate).await {
//!         PredictionResult::Success(p) => println!("{:?} {:?}", p.label(), p.confidence_percent()),
//!         PredictionResult::Failure { message } => eprintln!("{}", message),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Prediction client, builder and health check |
//! | [`types`] | Candidates, requests, results |
//! | [`error_code`] | Failure taxonomy and user-facing messages |
//! | [`upload_policy`] | Caller-side accepted types and size limit |
//! | [`config`] | Environment-derived configuration |

pub mod client;
pub mod config;
pub mod error_code;
pub mod types;
pub mod upload_policy;

pub use client::{predict, PredictionClient, PredictionClientBuilder};
pub use config::ClientConfig;
pub use error_code::PredictionErrorCode;
pub use types::{
    HealthStatus, Prediction, PredictionRequest, PredictionResult, ResponseMetadata,
    UploadCandidate,
};
pub use upload_policy::{PolicyViolation, UploadPolicy};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
