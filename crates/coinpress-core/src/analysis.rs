//! AI analysis reply parsing.
//!
//! The vision model is prompted to describe an uploaded image as
//! `NAME: ..., SYMBOL: ..., DESCRIPTION: ...`. Models follow that shape
//! loosely at best, so extraction is forgiving: fields are matched
//! case-insensitively anywhere in the reply, symbols are sanitized, and any
//! missing field falls back to a default so the minting flow always has a
//! complete profile to show the user.

use std::sync::OnceLock;

use regex::Regex;

use crate::{sanitize_symbol, CoinProfile};

/// Name used when the reply has no usable `NAME:` field.
pub const FALLBACK_NAME: &str = "AI Generated Coin";

/// Symbol used when the reply has no usable `SYMBOL:` field.
pub const FALLBACK_SYMBOL: &str = "AIC";

/// Description used when the reply has no usable `DESCRIPTION:` field.
pub const FALLBACK_DESCRIPTION: &str =
    "An AI-generated cryptocurrency based on uploaded image analysis.";

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)NAME:\s*([^\n,]+)").expect("valid regex"))
}

fn symbol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)SYMBOL:\s*([^\n,]+)").expect("valid regex"))
}

fn description_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)DESCRIPTION:\s*([^\n]+(?:\n[^\n]+)*)").expect("valid regex"))
}

/// Extract a coin profile from a model reply.
///
/// Never fails: unusable fields are replaced with the fallback constants,
/// and the symbol is sanitized to uppercase alphanumeric.
pub fn parse_analysis_reply(text: &str) -> CoinProfile {
    let name = capture(name_re(), text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    let symbol = capture(symbol_re(), text)
        .map(|s| sanitize_symbol(&s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_SYMBOL.to_string());

    let description = capture(description_re(), text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

    CoinProfile {
        name,
        symbol,
        description,
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any reply yields a complete profile, never a panic.
        #[test]
        fn prop_always_complete(text in ".{0,500}") {
            let profile = parse_analysis_reply(&text);
            prop_assert!(profile.is_complete());
        }

        /// Property: the parsed symbol is always sanitized.
        #[test]
        fn prop_symbol_sanitized(raw in "[a-zA-Z0-9 $#!-]{1,30}") {
            let reply = format!("NAME: N, SYMBOL: {raw}, DESCRIPTION: D.");
            let profile = parse_analysis_reply(&reply);

            prop_assert!(profile.symbol.len() <= crate::MAX_SYMBOL_LEN);
            prop_assert!(profile.symbol.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }
}
