//! Slash-separated path lookup into a value tree.
//!
//! A path like `"a/b/2"` names a value inside a nested tree: each segment
//! descends one level, by key in objects and by decimal index in arrays.
//! A leading `/` is accepted and ignored; the empty path names the root.
//! Inside a segment, `~1` unescapes to `/` and `~0` to `~`.
//!
//! Lookup borrows: the resolved value is a reference into the tree, never
//! a clone.
//!
//! # Example
//!
//! ```
//! use json_tree_core::{JsonArray, JsonObject, JsonValue, Member};
//! use json_tree_path::{find, get};
//!
//! let mut inner = JsonArray::new();
//! inner.push(10.0)?;
//! inner.push(20.0)?;
//! let mut obj = JsonObject::new();
//! obj.insert(Member::new("scores", inner))?;
//! let root = JsonValue::Object(obj);
//!
//! assert_eq!(get(&root, "scores/1"), Some(&JsonValue::Number(20.0)));
//! assert_eq!(get(&root, "scores/9"), None);
//! assert!(find(&root, "scores/9").is_err());
//! # Ok::<(), json_tree_core::TreeError>(())
//! ```

use json_tree_core::JsonValue;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A segment named a key or index that is not present.
    #[error("path segment not found: {0:?}")]
    NotFound(String),
    /// A segment addressed an array but is not a valid decimal index.
    #[error("invalid array index: {0:?}")]
    InvalidIndex(String),
    /// A segment tried to descend into a scalar value.
    #[error("cannot descend into non-container value at segment {0:?}")]
    NotAContainer(String),
}

/// Unescape one path segment: `~1` becomes `/`, `~0` becomes `~`.
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escape one path segment: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('/') && !segment.contains('~') {
        return segment.to_string();
    }
    // Order matters: ~ must be escaped before /
    segment.replace('~', "~0").replace('/', "~1")
}

/// Split a path into unescaped segments.
///
/// The empty path (or a bare `/`) is the root and yields no segments.
///
/// # Example
///
/// ```
/// use json_tree_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("a/b"), vec!["a", "b"]);
/// assert_eq!(parse_path("/a/b"), vec!["a", "b"]);
/// assert_eq!(parse_path("a~1b/c~0d"), vec!["a/b", "c~d"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(unescape_segment).collect()
}

/// Join segments back into a path string, escaping as needed.
///
/// Inverse of [`parse_path`] for paths without a leading slash.
pub fn format_path(segments: &[String]) -> String {
    let escaped: Vec<String> = segments.iter().map(|s| escape_segment(s)).collect();
    escaped.join("/")
}

/// Check that a segment is a valid array index: decimal digits only, no
/// leading zero unless the index is exactly `0`.
pub fn is_valid_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Resolve a path, or `None` when any segment fails for any reason.
pub fn get<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let mut current = value;
    for segment in parse_path(path) {
        match current {
            JsonValue::Object(obj) => current = obj.get(&segment)?,
            JsonValue::Array(arr) => {
                if !is_valid_index(&segment) {
                    return None;
                }
                let index: usize = segment.parse().ok()?;
                current = arr.get(index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Resolve a path, reporting why a lookup failed.
///
/// Per segment: a missing key or out-of-range index is
/// [`PathError::NotFound`]; a malformed index on an array is
/// [`PathError::InvalidIndex`]; descending into a scalar is
/// [`PathError::NotAContainer`].
pub fn find<'a>(value: &'a JsonValue, path: &str) -> Result<&'a JsonValue, PathError> {
    let mut current = value;
    for segment in parse_path(path) {
        match current {
            JsonValue::Object(obj) => {
                current = obj.get(&segment).ok_or(PathError::NotFound(segment))?;
            }
            JsonValue::Array(arr) => {
                if !is_valid_index(&segment) {
                    return Err(PathError::InvalidIndex(segment));
                }
                let index: usize = match segment.parse() {
                    Ok(i) => i,
                    Err(_) => return Err(PathError::InvalidIndex(segment)),
                };
                current = arr.get(index).ok_or(PathError::NotFound(segment))?;
            }
            _ => return Err(PathError::NotAContainer(segment)),
        }
    }
    Ok(current)
}
