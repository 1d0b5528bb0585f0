//! json-tree-core — in-memory JSON value tree.
//!
//! A tagged value tree ([`JsonValue`]) together with the two containers
//! that back it: an amortized-growth sequence ([`JsonArray`]) and an
//! open-addressing hash table ([`JsonObject`]) keyed by unique strings.
//!
//! Trees are built eagerly, bottom-up: construct leaf values, wrap them
//! into [`Member`]s or push them into arrays, and compose containers into
//! values. The root value exclusively owns its subtree; dropping it tears
//! everything down.
//!
//! # Example
//!
//! ```
//! use json_tree_core::{JsonObject, JsonValue, Member};
//!
//! let mut obj = JsonObject::new();
//! obj.insert(Member::new("enabled", true))?;
//! obj.insert(Member::new("retries", 3.0))?;
//!
//! let root = JsonValue::Object(obj);
//! let obj = root.as_object().unwrap();
//! assert_eq!(obj.len(), 2);
//! assert_eq!(obj.get("retries"), Some(&JsonValue::Number(3.0)));
//! # Ok::<(), json_tree_core::TreeError>(())
//! ```

pub mod array;
pub mod error;
pub mod hash;
pub mod member;
pub mod object;
pub mod value;

pub use array::JsonArray;
pub use error::TreeError;
pub use member::Member;
pub use object::JsonObject;
pub use value::JsonValue;

/// First-touch slot count of both containers. Growth doubles from here.
pub(crate) const INITIAL_CAPACITY: usize = 64;
