//! Prediction request: the wire form of one upload.

use super::{iso_timestamp, UploadCandidate};
use crate::Result;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};

/// Multipart field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";
pub const FILENAME_FIELD: &str = "filename";
pub const FILETYPE_FIELD: &str = "filetype";
pub const FILESIZE_FIELD: &str = "filesize";
pub const UPLOAD_TIME_FIELD: &str = "upload_time";

const FALLBACK_PART_MIME: &str = "application/octet-stream";

/// Ephemeral request derived from an [`UploadCandidate`] at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub image: Bytes,
    pub filename: String,
    pub media_type: String,
    pub size: u64,
    /// ISO-8601 timestamp captured when the request was built.
    pub upload_time: String,
}

impl PredictionRequest {
    pub fn from_candidate(candidate: &UploadCandidate, now: DateTime<Utc>) -> Self {
        Self {
            image: candidate.content().clone(),
            filename: candidate.filename().to_string(),
            media_type: candidate.media_type().to_string(),
            size: candidate.size(),
            upload_time: iso_timestamp(now),
        }
    }

    /// The text fields sent alongside the image, in wire order.
    pub fn metadata_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FILENAME_FIELD, self.filename.clone()),
            (FILETYPE_FIELD, self.media_type.clone()),
            (FILESIZE_FIELD, self.size.to_string()),
            (UPLOAD_TIME_FIELD, self.upload_time.clone()),
        ]
    }

    /// Build the multipart body.
    ///
    /// A declared media type that is not a valid MIME string is still sent in
    /// the `filetype` field; only the image part falls back to octet-stream.
    pub fn into_form(self) -> Result<Form> {
        let part = || {
            Part::stream_with_length(self.image.clone(), self.size).file_name(self.filename.clone())
        };
        let image = match part().mime_str(&self.media_type) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    media_type = %self.media_type,
                    error = %e,
                    "declared media type is not a valid MIME type; sending image as {}",
                    FALLBACK_PART_MIME
                );
                part().mime_str(FALLBACK_PART_MIME)?
            }
        };

        let mut form = Form::new().part(IMAGE_FIELD, image);
        for (name, value) in self.metadata_fields() {
            form = form.text(name, value);
        }
        Ok(form)
    }
}
