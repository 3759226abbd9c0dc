//! Content identifier helpers.
//!
//! The pinning service returns an opaque content identifier for uploaded
//! bytes. Nothing here parses or verifies the identifier; it only detects
//! the CID version from its prefix and renders the two URL forms the app
//! needs (`ipfs://` URIs for metadata, gateway URLs for display).

use serde::{Deserialize, Serialize};

/// Gateway used when the caller doesn't supply one.
pub const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud";

/// Content identifier version, detected from the string prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CidVersion {
    /// CIDv0: base58, always starts with `Qm`.
    V0,
    /// CIDv1: base32, starts with `baf` (`bafy` dag-pb, `bafk` raw, ...).
    V1,
    /// Anything else; treated as opaque.
    Unknown,
}

impl CidVersion {
    /// Short label as reported to the host application.
    pub fn as_str(self) -> &'static str {
        match self {
            CidVersion::V0 => "v0",
            CidVersion::V1 => "v1",
            CidVersion::Unknown => "unknown",
        }
    }
}

/// An opaque content identifier returned by the pinning service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap a raw identifier string, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detect the CID version from the prefix.
    pub fn version(&self) -> CidVersion {
        if self.0.starts_with("Qm") {
            CidVersion::V0
        } else if self.0.starts_with("baf") {
            CidVersion::V1
        } else {
            CidVersion::Unknown
        }
    }

    /// `ipfs://<cid>` URI, the form embedded in coin metadata.
    pub fn ipfs_uri(&self) -> String {
        format!("ipfs://{}", self.0)
    }

    /// HTTP gateway URL for display, e.g.
    /// `https://gateway.pinata.cloud/ipfs/<cid>`. Trailing slashes on the
    /// base are tolerated.
    pub fn gateway_url(&self, base: &str) -> String {
        format!("{}/ipfs/{}", base.trim_end_matches('/'), self.0)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
