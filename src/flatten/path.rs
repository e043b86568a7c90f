//! Path segment construction.
//!
//! Object members join with `.`, array elements append `[i]` directly, so a
//! root-level array element renders as `[0]`.

/// Path of an object member under `parent`
pub fn child_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of an array element under `parent`
pub fn child_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
