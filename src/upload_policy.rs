//! Upload acceptance policy.
//!
//! The prediction client sends whatever it is given. Deciding which files a
//! user may submit belongs to the caller, typically the file picker. This
//! module holds the default policy: JPEG or PNG, at most 5 MiB.

use crate::types::UploadCandidate;
use thiserror::Error;

pub const DEFAULT_ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png"];
pub const DEFAULT_MAX_SIZE: u64 = 5 * 1024 * 1024;

/// Why a candidate was refused before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("File type not supported. Please use JPEG or PNG.")]
    UnsupportedType { media_type: String },

    #[error("File too large. Max {}MB", format_mb(.max_size))]
    TooLarge { size: u64, max_size: u64 },
}

fn format_mb(bytes: &u64) -> String {
    let mb = *bytes as f64 / (1024.0 * 1024.0);
    if mb.fract() == 0.0 {
        format!("{}", mb as u64)
    } else {
        format!("{}", mb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub accepted_types: Vec<String>,
    pub max_size: u64,
}

impl UploadPolicy {
    pub fn new(accepted_types: Vec<String>, max_size: u64) -> Self {
        Self {
            accepted_types,
            max_size,
        }
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn accepts_type(&self, media_type: &str) -> bool {
        self.accepted_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(media_type))
    }

    /// Check a candidate. Type is checked before size.
    pub fn check(&self, candidate: &UploadCandidate) -> Result<(), PolicyViolation> {
        if !self.accepts_type(candidate.media_type()) {
            return Err(PolicyViolation::UnsupportedType {
                media_type: candidate.media_type().to_string(),
            });
        }
        if candidate.size() > self.max_size {
            return Err(PolicyViolation::TooLarge {
                size: candidate.size(),
                max_size: self.max_size,
            });
        }
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|s| s.to_string()).collect(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}
