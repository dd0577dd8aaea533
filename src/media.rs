//! Files picked for upload and their previews.

use std::io;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;

use crate::error::ValidationError;
use crate::traits::MultipartFile;

/// A file chosen by the user, with its declared media type.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, declaring its type from the extension.
    ///
    /// Unknown extensions are declared `application/octet-stream`.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime_guess::from_path(path).first_or_octet_stream();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(name, mime_type.essence_str(), bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// The multipart part carrying this file under `field`.
    pub fn to_multipart(&self, field: &str) -> MultipartFile {
        MultipartFile {
            field: field.to_string(),
            file_name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// The kinds of media a post can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a declared media type by its top-level category.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if mime_type.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime_type.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A validated file waiting to be attached to a post, with its preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file: SelectedFile,
    pub kind: MediaKind,
    /// `data:` URL of the file, when the preview could be built
    pub preview: Option<String>,
}

impl PendingUpload {
    /// Validate the file's type and build its preview.
    ///
    /// Anything that is not an image or a video is rejected before the
    /// bytes are touched.
    pub async fn select(file: SelectedFile) -> Result<Self, ValidationError> {
        let kind = MediaKind::from_mime(&file.mime_type).ok_or_else(|| {
            ValidationError::UnsupportedMediaType {
                mime_type: file.mime_type.clone(),
            }
        })?;
        let preview = build_preview(&file).await;
        Ok(Self {
            file,
            kind,
            preview,
        })
    }
}

/// Encode bytes as a `data:` URL.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, BASE64.encode(bytes))
}

/// Build the preview off the async runtime's worker threads.
pub async fn build_preview(file: &SelectedFile) -> Option<String> {
    let mime_type = file.mime_type.clone();
    let bytes = file.bytes.clone();
    match tokio::task::spawn_blocking(move || data_url(&mime_type, &bytes)).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!(file = %file.name, error = %e, "Preview generation failed");
            None
        }
    }
}
