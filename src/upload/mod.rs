//! Client-side image checks run before any upload request.
//!
//! Advisory only: the backend repeats its own checks. This just avoids
//! sending files that are certain to be rejected.

use std::fmt;
use std::path::Path;

use crate::errors::{ClientError, ClientResult};

/// Largest accepted image, in megabytes.
pub const MAX_IMAGE_SIZE_MB: u64 = 5;
/// Largest accepted image, in bytes.
pub const MAX_IMAGE_SIZE_BYTES: u64 = MAX_IMAGE_SIZE_MB * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Human-readable list of accepted formats.
pub const DISPLAY_FORMATS: &str = "JPEG, PNG, GIF, WebP";

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ClientError::Validation(format!("Not a file: {}", path.display())))?;
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Why a file was refused before upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageRejection {
    Missing,
    Empty,
    InvalidType,
    InvalidExtension,
    TooLarge { size_bytes: u64 },
}

impl fmt::Display for ImageRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRejection::Missing => write!(f, "No file selected"),
            ImageRejection::Empty => write!(
                f,
                "The selected file is empty. Please choose a valid image."
            ),
            ImageRejection::InvalidType => write!(
                f,
                "Invalid file type. Please upload a {} image.",
                DISPLAY_FORMATS
            ),
            ImageRejection::InvalidExtension => write!(
                f,
                "Invalid file format. Please upload a {} image.",
                DISPLAY_FORMATS
            ),
            ImageRejection::TooLarge { size_bytes } => write!(
                f,
                "File too large: {:.1}MB exceeds the {}MB limit.",
                *size_bytes as f64 / (1024.0 * 1024.0),
                MAX_IMAGE_SIZE_MB
            ),
        }
    }
}

impl From<ImageRejection> for ClientError {
    fn from(rejection: ImageRejection) -> Self {
        ClientError::Validation(rejection.to_string())
    }
}

/// Check a picked file. The first failing rule wins, in this order:
/// missing, empty, MIME type, extension, size.
pub fn validate_image(file: Option<&ImageFile>) -> Result<(), ImageRejection> {
    let file = file.ok_or(ImageRejection::Missing)?;

    if file.size() == 0 {
        return Err(ImageRejection::Empty);
    }

    if !ALLOWED_IMAGE_TYPES.contains(&file.content_type.to_lowercase().as_str()) {
        return Err(ImageRejection::InvalidType);
    }

    let name = file.file_name.to_lowercase();
    if !ALLOWED_IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return Err(ImageRejection::InvalidExtension);
    }

    if file.size() > MAX_IMAGE_SIZE_BYTES {
        return Err(ImageRejection::TooLarge {
            size_bytes: file.size(),
        });
    }

    Ok(())
}
