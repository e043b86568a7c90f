use crate::flatten::parser::JsonParser;
use serde::{Deserialize, Serialize};

/// Names of the two text columns every flattened record carries
pub const OUTPUT_COLUMNS: [&str; 2] = ["key", "value"];

/// One flattened leaf - a single output row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatPair {
    /// Dotted/bracketed path of the leaf, e.g. "user.tags[0]"
    pub key: String,

    /// Textual rendering of the leaf scalar
    pub value: String,
}

impl FlatPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        FlatPair {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(&str, &str)> for FlatPair {
    fn from((key, value): (&str, &str)) -> Self {
        FlatPair::new(key, value)
    }
}

/// Configuration for the flattening process
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Maximum nesting depth to descend into (root = 0)
    pub max_depth: usize,

    /// Path prefix the root document is anchored at
    pub root_prefix: String,

    /// Parser used for raw JSON text
    pub parser: JsonParser,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            max_depth: 100,
            root_prefix: String::new(),
            parser: JsonParser::Serde,
        }
    }
}
