use crate::flatten::error::{FlattenError, FlattenResult};
use crate::flatten::path::{child_index, child_key};
use crate::flatten::scalar::scalar_text;
use crate::flatten::sink::PairSink;
use crate::flatten::types::{FlatPair, FlattenConfig};
use serde_json::Value;

/// Flattens JSON documents into ordered (path, value) pairs.
///
/// Holds configuration only; every invocation starts from an empty buffer,
/// so one flattener can be shared across threads handling separate documents.
#[derive(Debug, Clone, Default)]
pub struct JsonFlattener {
    config: FlattenConfig,
}

impl JsonFlattener {
    pub fn new(config: FlattenConfig) -> Self {
        JsonFlattener { config }
    }

    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Flatten `node` with every path anchored at `parent_path`
    pub fn flatten(&self, node: &Value, parent_path: &str) -> FlattenResult<Vec<FlatPair>> {
        let mut pairs = Vec::new();
        self.walk(node, parent_path.to_string(), 0, &mut pairs)?;
        Ok(pairs)
    }

    /// Collect every pair of a document under the configured root prefix
    pub fn collect(&self, node: &Value) -> FlattenResult<Vec<FlatPair>> {
        self.flatten(node, &self.config.root_prefix)
    }

    /// Collect a whole document, then hand its pairs to `sink` as one batch.
    ///
    /// Returns the number of pairs forwarded. Nothing reaches the sink when
    /// traversal fails.
    pub fn forward<S: PairSink>(&self, node: &Value, sink: &mut S) -> FlattenResult<usize> {
        let pairs = self.collect(node)?;
        let count = pairs.len();
        sink.emit_batch(pairs)?;
        log::debug!("forwarded {} pairs", count);
        Ok(count)
    }

    /// Parse and flatten raw document text; `None` yields no pairs
    pub fn flatten_str(&self, input: Option<&str>) -> FlattenResult<Vec<FlatPair>> {
        let Some(text) = input else {
            return Ok(Vec::new());
        };
        let root = self.config.parser.parse(text, self.config.max_depth)?;
        self.collect(&root)
    }

    /// Parse, flatten and forward one document - the per-row host entry
    pub fn process<S: PairSink>(&self, input: Option<&str>, sink: &mut S) -> FlattenResult<usize> {
        let Some(text) = input else {
            log::debug!("absent input, nothing to flatten");
            return Ok(0);
        };
        let root = self.config.parser.parse(text, self.config.max_depth).map_err(|err| {
            log::debug!("failed to parse document: {}", err);
            err
        })?;
        self.forward(&root, sink)
    }

    /// Depth-first, pre-order traversal
    fn walk(
        &self,
        node: &Value,
        path: String,
        depth: usize,
        pairs: &mut Vec<FlatPair>,
    ) -> FlattenResult<()> {
        if depth > self.config.max_depth {
            log::trace!("depth {} exceeds limit at '{}'", depth, path);
            return Err(FlattenError::DepthLimitExceeded {
                limit: self.config.max_depth,
                location: path,
            });
        }

        match node {
            Value::Object(obj) => {
                for (key, child) in obj {
                    self.walk(child, child_key(&path, key), depth + 1, pairs)?;
                }
            }
            Value::Array(arr) => {
                for (idx, element) in arr.iter().enumerate() {
                    self.walk(element, child_index(&path, idx), depth + 1, pairs)?;
                }
            }
            _ => {
                pairs.push(FlatPair {
                    key: path,
                    value: scalar_text(node),
                });
            }
        }

        Ok(())
    }
}
