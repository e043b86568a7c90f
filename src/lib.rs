//! # json-flatten - JSON key/value flattening
//!
//! Turns an arbitrary JSON document into an ordered sequence of
//! `(key, value)` rows, one per scalar leaf. Keys spell out where the leaf
//! sits in the document, values are the leaf rendered as text.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_flatten::{FlatPair, JsonFlattener};
//!
//! # fn main() -> anyhow::Result<()> {
//! let flattener = JsonFlattener::default();
//! let pairs = flattener.flatten_str(Some(r#"{"user":{"name":"Alice"},"tags":["a","b"]}"#))?;
//!
//! assert_eq!(pairs, vec![
//!     FlatPair::new("user.name", "Alice"),
//!     FlatPair::new("tags[0]", "a"),
//!     FlatPair::new("tags[1]", "b"),
//! ]);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::io::BufRead;

pub mod flatten;

pub use flatten::{
    FlatPair, FlattenConfig, FlattenError, FlattenResult, FnSink, JsonFlattener, JsonParser,
    OutputFormat, PairSink, PairWriter, OUTPUT_COLUMNS,
};

/// Flatten a newline-delimited JSON stream, one document per line.
///
/// Blank lines count as absent documents. Returns the total number of pairs
/// forwarded to `sink`.
pub fn flatten_ndjson<R: BufRead, S: PairSink>(
    reader: R,
    sink: &mut S,
    config: FlattenConfig,
) -> Result<usize> {
    let flattener = JsonFlattener::new(config);
    let mut total = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line")?;
        let trimmed = line.trim();
        let input = if trimmed.is_empty() { None } else { Some(trimmed) };

        total += flattener
            .process(input, sink)
            .with_context(|| format!("Failed to flatten document on line {}", idx + 1))?;
    }

    log::debug!("flattened ndjson stream: {} pairs", total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ndjson_stream() {
        let input = "{\"a\":1}\n\n[true,{\"b\":null}]\n{}\n";
        let mut sink: Vec<FlatPair> = Vec::new();

        let total = flatten_ndjson(Cursor::new(input), &mut sink, FlattenConfig::default()).unwrap();

        assert_eq!(total, 3);
        assert_eq!(
            sink,
            vec![
                FlatPair::new("a", "1"),
                FlatPair::new("[0]", "true"),
                FlatPair::new("[1].b", "null"),
            ]
        );
    }

    #[test]
    fn test_ndjson_failure_names_line() {
        let input = "{\"a\":1}\n{\"broken\":\n{\"c\":3}\n";
        let mut sink: Vec<FlatPair> = Vec::new();

        let err = flatten_ndjson(Cursor::new(input), &mut sink, FlattenConfig::default()).unwrap_err();

        assert!(err.to_string().contains("line 2"));
        assert!(matches!(
            err.downcast_ref::<FlattenError>(),
            Some(FlattenError::Parse(_))
        ));
        // earlier documents are complete batches; the broken one added nothing
        assert_eq!(sink, vec![FlatPair::new("a", "1")]);
    }
}
