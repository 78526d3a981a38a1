//! Image payload handling
//!
//! Accepts worklist images as files, raw bytes, or base64 text (bare or
//! wrapped in a `data:image/...;base64,` prefix) and validates that the
//! payload decodes as an image before any engine call is made.

use crate::error::{Result, WorklistAiError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::Path;

/// A validated worklist image, ready to attach to an engine request.
///
/// The base64 data is always prefix-free and is known to decode to a real
/// image; the MIME type is sniffed from the decoded bytes, so the same
/// image yields the same payload whether or not it arrived with a data-URL
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime_type: String,
    data: String,
}

/// Extract the base64 data portion of a data URL.
///
/// Returns the input unchanged when there is no prefix, so stripping is
/// idempotent.
pub fn strip_data_url_prefix(input: &str) -> &str {
    match input.split_once(',') {
        Some((_, data)) => data,
        None => input,
    }
}

impl ImagePayload {
    /// Build a payload from base64 text, bare or data-URL wrapped.
    pub fn from_base64(input: &str) -> Result<Self> {
        let data = strip_data_url_prefix(input.trim());
        let bytes = BASE64
            .decode(data)
            .map_err(|e| WorklistAiError::InvalidImage(format!("base64 decode failed: {}", e)))?;

        let mime_type = sniff_mime_type(&bytes)?;

        Ok(Self {
            mime_type,
            data: data.to_string(),
        })
    }

    /// Build a payload from raw image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mime_type = sniff_mime_type(bytes)?;

        Ok(Self {
            mime_type,
            data: BASE64.encode(bytes),
        })
    }

    /// Read and validate an image file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WorklistAiError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// MIME type sniffed from the image bytes (e.g. "image/jpeg").
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Prefix-free base64 image data.
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Confirm the bytes decode as an image and report their MIME type.
fn sniff_mime_type(bytes: &[u8]) -> Result<String> {
    let format = image::guess_format(bytes)
        .map_err(|e| WorklistAiError::InvalidImage(format!("unrecognized image format: {}", e)))?;

    image::load_from_memory(bytes)
        .map_err(|e| WorklistAiError::InvalidImage(format!("image decode failed: {}", e)))?;

    Ok(format.to_mime_type().to_string())
}
