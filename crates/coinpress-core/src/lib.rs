//! Coinpress Core - Coin image and metadata preparation library
//!
//! This crate provides the core preparation logic for minting a coin from an
//! uploaded image: budget-driven image compression, analysis preview encoding,
//! coin metadata construction, content identifier helpers, and AI reply
//! parsing. Network transport (pinning, inference, wallet, on-chain SDK) is
//! left to the host application.

pub mod analysis;
pub mod cid;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod metadata;

pub use cid::{CidVersion, ContentId};
pub use compress::{compress_to_budget, preview_jpeg, CompressError, CompressedImage};
pub use encode::FormatTag;
pub use metadata::{CoinMetadata, MetadataError};

/// Maximum number of characters in a coin ticker symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Profile of a coin to be minted: the fields a user (or the AI analysis)
/// fills in before metadata is built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinProfile {
    /// Display name of the coin.
    pub name: String,
    /// Ticker symbol, uppercase alphanumeric, at most [`MAX_SYMBOL_LEN`] chars.
    pub symbol: String,
    /// Free-text description shown alongside the coin.
    pub description: String,
}

impl CoinProfile {
    /// Create a profile, sanitizing the symbol (see [`sanitize_symbol`]).
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: sanitize_symbol(&symbol.into()),
            description: description.into(),
        }
    }

    /// Check that every field carries non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.symbol.is_empty()
            && !self.description.trim().is_empty()
    }
}

/// Normalize a raw ticker symbol: uppercase, ASCII alphanumeric only,
/// truncated to [`MAX_SYMBOL_LEN`] characters.
///
/// Returns an empty string if nothing usable remains; callers fall back to
/// a default symbol in that case.
pub fn sanitize_symbol(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_SYMBOL_LEN)
        .collect()
}
