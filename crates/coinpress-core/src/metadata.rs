//! Coin metadata document construction and validation.
//!
//! The minting flow pins two objects: the compressed artwork and a JSON
//! metadata document referencing it. The document shape follows what the
//! coin SDK validates before a mint transaction is sent:
//!
//! ```json
//! {
//!   "name": "Sunset Coin",
//!   "ticker": "SUN",
//!   "description": "...",
//!   "image": "ipfs://bafy.../",
//!   "content": { "mime": "image/png", "uri": "ipfs://bafy.../" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::FormatTag;
use crate::{sanitize_symbol, CoinProfile, MAX_SYMBOL_LEN};

/// Errors raised by metadata validation and serialization.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A required field is empty or whitespace.
    #[error("Metadata field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// The ticker contains characters the mint contract rejects.
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidTicker(String),

    /// The image reference is not an ipfs:// or https:// URI.
    #[error("Invalid image URI: {0:?}")]
    InvalidImageUri(String),

    /// JSON serialization failure.
    #[error("Metadata serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Media reference embedded in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaContent {
    /// MIME type of the pinned artwork.
    pub mime: String,
    /// URI of the pinned artwork, usually `ipfs://<cid>`.
    pub uri: String,
}

/// The metadata document pinned alongside a coin's artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMetadata {
    /// Display name of the coin.
    pub name: String,
    /// Ticker symbol.
    pub ticker: String,
    /// Free-text description.
    pub description: String,
    /// URI of the artwork, duplicated from `content.uri` for indexers that
    /// only read the top-level field.
    pub image: String,
    /// Typed media reference.
    pub content: MediaContent,
}

impl CoinMetadata {
    /// Build the document for a profile and its pinned artwork.
    pub fn new(profile: &CoinProfile, image_uri: impl Into<String>, format: FormatTag) -> Self {
        let image_uri = image_uri.into();
        Self {
            name: profile.name.clone(),
            ticker: profile.symbol.clone(),
            description: profile.description.clone(),
            image: image_uri.clone(),
            content: MediaContent {
                mime: format.mime_type().to_string(),
                uri: image_uri,
            },
        }
    }

    /// Check the document against the constraints the mint SDK enforces.
    ///
    /// Description may be empty; name, ticker, and image reference may not.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.name.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "name" });
        }
        if self.ticker.is_empty() {
            return Err(MetadataError::EmptyField { field: "ticker" });
        }
        if self.ticker.len() > MAX_SYMBOL_LEN || sanitize_symbol(&self.ticker) != self.ticker {
            return Err(MetadataError::InvalidTicker(self.ticker.clone()));
        }
        if self.image.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "image" });
        }
        if !has_supported_scheme(&self.image) {
            return Err(MetadataError::InvalidImageUri(self.image.clone()));
        }
        if !has_supported_scheme(&self.content.uri) {
            return Err(MetadataError::InvalidImageUri(self.content.uri.clone()));
        }
        Ok(())
    }

    /// Serialize with two-space indentation, the exact shape uploaded to the
    /// pinning service as `metadata.json`.
    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn has_supported_scheme(uri: &str) -> bool {
    uri.starts_with("ipfs://") || uri.starts_with("https://")
}
