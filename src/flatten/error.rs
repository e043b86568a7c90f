use thiserror::Error;

/// Errors that abort a single flattening invocation.
///
/// A failed invocation never releases any pairs to its sink.
#[derive(Error, Debug)]
pub enum FlattenError {
    /// Input text is not well-formed JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// Document nesting went past the configured limit.
    ///
    /// `location` is the leaf path when found during traversal, or the byte
    /// offset when found while scanning raw text.
    #[error("depth limit of {limit} exceeded at {location}")]
    DepthLimitExceeded { limit: usize, location: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for FlattenError {
    fn from(err: serde_json::Error) -> Self {
        FlattenError::Parse(err.to_string())
    }
}

impl From<simd_json::Error> for FlattenError {
    fn from(err: simd_json::Error) -> Self {
        FlattenError::Parse(err.to_string())
    }
}

pub type FlattenResult<T> = Result<T, FlattenError>;
