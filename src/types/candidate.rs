//! Upload candidates: the image a user picked, before it is submitted.

use base64::Engine as _;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::path::Path;

/// A user-selected image awaiting submission.
///
/// Immutable once built. A new selection replaces the candidate rather than
/// mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    content: Bytes,
    media_type: String,
    filename: String,
    selected_at: DateTime<Utc>,
}

impl UploadCandidate {
    pub fn new(
        filename: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            content: content.into(),
            media_type: media_type.into(),
            filename: filename.into(),
            selected_at: Utc::now(),
        }
    }

    /// Read a candidate from disk, inferring the media type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string();
        let media_type = guess_media_type(path);
        Ok(Self::new(filename, media_type, bytes))
    }

    /// Override the selection timestamp (useful when replaying a stored selection).
    pub fn with_selected_at(mut self, at: DateTime<Utc>) -> Self {
        self.selected_at = at;
        self
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn selected_at(&self) -> DateTime<Utc> {
        self.selected_at
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Size in mebibytes, two decimals, as shown next to the file name.
    pub fn size_mb(&self) -> String {
        format!("{:.2}", self.size() as f64 / 1024.0 / 1024.0)
    }

    /// Render the image as a `data:` URL for previews.
    pub fn to_data_url(&self) -> String {
        let data = base64::engine::general_purpose::STANDARD.encode(&self.content);
        format!("data:{};base64,{}", self.media_type, data)
    }
}

fn guess_media_type(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mt = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    };
    mt.to_string()
}
