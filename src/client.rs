//! Prediction client.
//!
//! Keep the public surface small and predictable: build a client, call
//! `predict`, display the result. Implementation details are split into
//! submodules under `src/client/`.

pub mod builder;
pub mod core;
mod error_classification;
mod response;

pub use builder::PredictionClientBuilder;
pub use self::core::{predict, PredictionClient, HEALTH_PATH, PREDICT_PATH};

pub(crate) use error_classification::is_connectivity_failure;
