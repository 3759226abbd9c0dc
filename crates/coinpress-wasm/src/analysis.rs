//! AI analysis reply parsing WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { parse_analysis_reply } from '@coinpress/wasm';
//!
//! const reply = aiResponse.result.description;
//! const profile = parse_analysis_reply(reply);
//! console.log(profile.name, profile.symbol, profile.description);
//! ```

use coinpress_core::analysis;
use wasm_bindgen::prelude::*;

/// Extract a coin profile from a vision model's free-text reply.
///
/// Matches `NAME:`, `SYMBOL:`, and `DESCRIPTION:` fields case-insensitively,
/// sanitizes the symbol, and substitutes defaults for anything missing, so
/// the returned object always has all three fields populated.
#[wasm_bindgen]
pub fn parse_analysis_reply(text: &str) -> Result<JsValue, JsValue> {
    let profile = analysis::parse_analysis_reply(text);
    serde_wasm_bindgen::to_value(&profile).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for analysis bindings.
///
/// The binding returns `JsValue`, so native tests exercise the core parser
/// it delegates to.
#[cfg(test)]
mod tests {
    use coinpress_core::analysis;

    #[test]
    fn test_core_parser_reachable() {
        let profile =
            analysis::parse_analysis_reply("NAME: Test, SYMBOL: TST, DESCRIPTION: A test.");
        assert_eq!(profile.name, "Test");
        assert_eq!(profile.symbol, "TST");
    }
}
