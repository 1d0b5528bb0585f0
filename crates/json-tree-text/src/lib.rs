//! json-tree-text — renderers for [`json_tree_core`] value trees.
//!
//! Two independent recursive renderers over the same tag dispatch:
//! [`to_json_string`] produces compact, strict JSON text (RFC 8259
//! escaping, no whitespace), and [`PrettyPrinter`] writes an indented,
//! optionally colorized diagnostic view to any [`std::fmt::Write`] sink.
//!
//! Both emit object members in the table's physical slot order, so output
//! is deterministic for a fixed tree.
//!
//! # Example
//!
//! ```
//! use json_tree_core::{JsonArray, JsonValue};
//! use json_tree_text::to_json_string;
//!
//! let mut arr = JsonArray::new();
//! arr.push(1.0)?;
//! arr.push(2.0)?;
//! arr.push(3.0)?;
//! assert_eq!(to_json_string(&JsonValue::Array(arr)), "[1,2,3]");
//! # Ok::<(), json_tree_core::TreeError>(())
//! ```

pub mod compact;
pub mod escape;
pub mod number;
pub mod pretty;

pub use compact::{to_json_string, JsonTextWriter};
pub use pretty::{to_colored_string, to_pretty_string, PrettyPrinter};
