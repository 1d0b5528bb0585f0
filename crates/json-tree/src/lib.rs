//! json-tree — an in-memory JSON value model.
//!
//! A tagged value tree ([`JsonValue`]) backed by a purpose-built
//! open-addressing hash table for objects ([`JsonObject`]) and a growable
//! sequence for arrays ([`JsonArray`]), with a compact JSON serializer, an
//! indented diagnostic printer, and slash-path lookup.
//!
//! Trees are built eagerly before being inspected or serialized; there is
//! no parser or streaming layer here. Object iteration (and therefore
//! serialized member order) follows the table's physical slot layout, not
//! insertion order.
//!
//! # Example
//!
//! ```
//! use json_tree::{path, to_json_string, JsonArray, JsonObject, JsonValue, Member};
//!
//! let mut tags = JsonArray::new();
//! tags.push("fast")?;
//! tags.push("small")?;
//!
//! let mut obj = JsonObject::new();
//! obj.insert(Member::new("name", "json-tree"))?;
//! obj.insert(Member::new("stars", 7.0))?;
//! obj.insert(Member::new("tags", tags))?;
//!
//! let root = JsonValue::Object(obj);
//! let text = to_json_string(&root);
//! assert!(text.contains("\"stars\":7"));
//! assert_eq!(path::get(&root, "tags/0"), Some(&JsonValue::from("fast")));
//! # Ok::<(), json_tree::TreeError>(())
//! ```

pub use json_tree_core::{JsonArray, JsonObject, JsonValue, Member, TreeError};
pub use json_tree_text::{
    to_colored_string, to_json_string, to_pretty_string, JsonTextWriter, PrettyPrinter,
};

/// Slash-separated path lookup (`"a/b/2"`-style).
pub mod path {
    pub use json_tree_path::{
        escape_segment, find, format_path, get, is_valid_index, parse_path, unescape_segment,
        PathError,
    };
}
