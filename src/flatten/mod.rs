//! JSON flattening - turn a nested document into ordered key/value rows
//!
//! Each scalar leaf becomes one `FlatPair` whose key is the leaf's path:
//! object members join with `.`, array elements append `[index]`.
//!
//! ## Batching
//!
//! `JsonFlattener::forward` and `JsonFlattener::process` collect a whole
//! document before anything reaches the `PairSink`, so a document that fails
//! to parse or exceeds the depth limit emits no rows at all.

pub mod types;
pub mod error;
pub mod path;
pub mod scalar;
pub mod parser;
pub mod sink;
pub mod flattener;
pub mod writer;

pub use types::{FlatPair, FlattenConfig, OUTPUT_COLUMNS};
pub use error::{FlattenError, FlattenResult};
pub use parser::JsonParser;
pub use sink::{FnSink, PairSink};
pub use flattener::JsonFlattener;
pub use writer::{OutputFormat, PairWriter};
