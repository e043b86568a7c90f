//! JSON text parsing backends.
//!
//! Both backends produce a `serde_json::Value` whose objects keep document
//! key order, so the flattener sees the same tree whichever one parsed it.

use crate::flatten::error::{FlattenError, FlattenResult};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Parser used to turn raw document text into a JSON tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonParser {
    /// `serde_json` reader
    #[default]
    Serde,
    /// SIMD-accelerated `simd-json`, deserialized through serde
    Simd,
}

impl JsonParser {
    /// Parse one complete JSON document.
    ///
    /// Text nesting containers deeper than `max_depth` is rejected before
    /// any parser recurses into it.
    pub fn parse(&self, text: &str, max_depth: usize) -> FlattenResult<Value> {
        check_nesting(text, max_depth)?;

        match self {
            JsonParser::Serde => Ok(serde_json::from_str(text)?),
            JsonParser::Simd => {
                // simd-json parses in place
                let mut bytes = text.as_bytes().to_vec();
                match simd_json::serde::from_slice(&mut bytes) {
                    Ok(value) => Ok(value),
                    Err(err) => {
                        // Fallback to serde_json for numbers simd-json can't hold
                        log::debug!("simd-json rejected document ({}), retrying with serde_json", err);
                        Ok(serde_json::from_str(text)?)
                    }
                }
            }
        }
    }
}

/// Reject documents whose containers sit deeper than `max_depth`.
///
/// Same depth numbering as the flattener: the root container is depth 0.
/// Brackets inside string literals don't count.
fn check_nesting(text: &str, max_depth: usize) -> FlattenResult<()> {
    let mut open = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                if open > max_depth {
                    log::trace!("container at depth {} exceeds limit at byte {}", open, offset);
                    return Err(FlattenError::DepthLimitExceeded {
                        limit: max_depth,
                        location: format!("byte {}", offset),
                    });
                }
                open += 1;
            }
            b'}' | b']' => open = open.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

impl FromStr for JsonParser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serde" => Ok(JsonParser::Serde),
            "simd" => Ok(JsonParser::Simd),
            other => Err(format!("unknown parser '{}' (expected 'serde' or 'simd')", other)),
        }
    }
}

impl fmt::Display for JsonParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonParser::Serde => write!(f, "serde"),
            JsonParser::Simd => write!(f, "simd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LIMIT: usize = 100;

    const DOC: &str = r#"{"z":1,"a":{"y":[true,null,2.5]},"m":"text"}"#;

    #[test]
    fn test_backends_agree() {
        let from_serde = JsonParser::Serde.parse(DOC, LIMIT).unwrap();
        let from_simd = JsonParser::Simd.parse(DOC, LIMIT).unwrap();

        assert_eq!(from_serde, from_simd);
        assert_eq!(from_serde, json!({"z": 1, "a": {"y": [true, null, 2.5]}, "m": "text"}));
    }

    #[test]
    fn test_key_order_preserved() {
        for parser in [JsonParser::Serde, JsonParser::Simd] {
            let value = parser.parse(DOC, LIMIT).unwrap();
            let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys, ["z", "a", "m"], "parser {}", parser);
        }
    }

    #[test]
    fn test_malformed_input() {
        for parser in [JsonParser::Serde, JsonParser::Simd] {
            let err = parser.parse(r#"{"name": "Alice""#, LIMIT).unwrap_err();
            assert!(matches!(err, FlattenError::Parse(_)), "parser {}", parser);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("simd".parse::<JsonParser>().unwrap(), JsonParser::Simd);
        assert_eq!("SERDE".parse::<JsonParser>().unwrap(), JsonParser::Serde);
        assert!("jackson".parse::<JsonParser>().is_err());
    }

    #[test]
    fn test_deep_nesting_rejected_before_parsing() {
        let depth = 100_000;
        let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

        for parser in [JsonParser::Serde, JsonParser::Simd] {
            let err = parser.parse(&text, LIMIT).unwrap_err();
            match err {
                FlattenError::DepthLimitExceeded { limit, location } => {
                    assert_eq!(limit, LIMIT);
                    assert_eq!(location, format!("byte {}", LIMIT + 1));
                }
                other => panic!("parser {}: expected depth error, got {other:?}", parser),
            }
        }
    }

    #[test]
    fn test_nesting_limit_boundary() {
        // containers at depth 0 and 1 are fine with a limit of 1, depth 2 is not
        assert!(check_nesting(r#"{"a":[]}"#, 1).is_ok());
        assert!(matches!(
            check_nesting(r#"{"a":[{}]}"#, 1),
            Err(FlattenError::DepthLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_brackets_inside_strings_ignored() {
        let text = r#"{"k":"[[[{{{","q":"say \"[[[\""}"#;
        assert!(check_nesting(text, 0).is_ok());

        for parser in [JsonParser::Serde, JsonParser::Simd] {
            let value = parser.parse(text, 0).unwrap();
            assert_eq!(value["k"], "[[[{{{");
        }
    }

    #[test]
    fn test_big_integers_parse_on_both_backends() {
        let text = r#"{"id":12345678901234567890123,"neg":-98765432109876543210}"#;
        let from_serde = JsonParser::Serde.parse(text, LIMIT).unwrap();
        let from_simd = JsonParser::Simd.parse(text, LIMIT).unwrap();

        assert_eq!(from_serde, from_simd);
        assert_eq!(from_serde["id"].to_string(), "12345678901234567890123");
    }
}
