//! Encode target formats parsed from MIME-style tags.

use serde::{Deserialize, Serialize};

use super::EncodeError;

/// An image format the upload pipeline can re-encode to.
///
/// Parsed from the MIME-style tag the host application carries alongside the
/// uploaded bytes (`image/jpeg`, `image/png`). The compressed output keeps
/// the source's tag, so a PNG upload is pinned as PNG and a JPEG as JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatTag {
    /// JPEG, lossy, quality-controlled.
    Jpeg,
    /// PNG, lossless, no quality knob.
    Png,
}

impl FormatTag {
    /// Parse a MIME-style tag, normalizing the common `image/jpg` variant.
    ///
    /// Unknown tags are an error rather than a silent PNG fallback: the
    /// output contract promises bytes in the input's format.
    pub fn parse(tag: &str) -> Result<Self, EncodeError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(FormatTag::Jpeg),
            "image/png" => Ok(FormatTag::Png),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Canonical MIME type, as embedded in coin metadata.
    pub fn mime_type(self) -> &'static str {
        match self {
            FormatTag::Jpeg => "image/jpeg",
            FormatTag::Png => "image/png",
        }
    }

    /// File extension used for upload filenames (e.g. `coin-image.png`).
    pub fn extension(self) -> &'static str {
        match self {
            FormatTag::Jpeg => "jpeg",
            FormatTag::Png => "png",
        }
    }

    /// Whether the encoder for this format has a quality knob.
    ///
    /// The compression loop only walks the quality phase for formats that
    /// answer true; for the rest, re-encoding at a lower "quality" would
    /// produce byte-identical output.
    pub fn supports_quality(self) -> bool {
        matches!(self, FormatTag::Jpeg)
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}
