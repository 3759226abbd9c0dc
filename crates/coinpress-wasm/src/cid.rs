//! Content identifier WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { cid_version, ipfs_uri, gateway_url } from '@coinpress/wasm';
//!
//! const cid = uploadResponse.hash;
//! console.log(cid_version(cid));          // "v1"
//! const metadataUri = ipfs_uri(cid);      // "ipfs://bafy..."
//! const display = gateway_url(cid, null); // default gateway
//! ```

use coinpress_core::cid::{ContentId, DEFAULT_GATEWAY};
use wasm_bindgen::prelude::*;

/// Detect the version of a content identifier: `"v0"`, `"v1"`, or
/// `"unknown"`.
#[wasm_bindgen]
pub fn cid_version(cid: &str) -> String {
    ContentId::new(cid).version().as_str().to_string()
}

/// Render the `ipfs://<cid>` URI embedded in coin metadata.
#[wasm_bindgen]
pub fn ipfs_uri(cid: &str) -> String {
    ContentId::new(cid).ipfs_uri()
}

/// Render an HTTP gateway URL for display. Pass `null` for the default
/// gateway.
#[wasm_bindgen]
pub fn gateway_url(cid: &str, base: Option<String>) -> String {
    let base = base.unwrap_or_else(|| DEFAULT_GATEWAY.to_string());
    ContentId::new(cid).gateway_url(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CID_V1: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

    #[test]
    fn test_cid_version() {
        assert_eq!(cid_version("QmYwAPJzv5CZsnAzt8auVZRn1pfejdKYYxJzGSjwAuqZkN"), "v0");
        assert_eq!(cid_version(CID_V1), "v1");
        assert_eq!(cid_version("garbage"), "unknown");
    }

    #[test]
    fn test_ipfs_uri() {
        assert_eq!(ipfs_uri(CID_V1), format!("ipfs://{CID_V1}"));
    }

    #[test]
    fn test_gateway_url_default() {
        assert_eq!(
            gateway_url(CID_V1, None),
            format!("https://gateway.pinata.cloud/ipfs/{CID_V1}")
        );
    }

    #[test]
    fn test_gateway_url_custom_base() {
        assert_eq!(
            gateway_url(CID_V1, Some("https://ipfs.io/".to_string())),
            format!("https://ipfs.io/ipfs/{CID_V1}")
        );
    }
}
