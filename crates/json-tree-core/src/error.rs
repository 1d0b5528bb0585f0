use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by the tree construction and mutation API.
///
/// Callers only ever see typed errors from fallible operations; the crate
/// never panics on bad input or exhausted memory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The key already exists in the target object. The table is left
    /// untouched; the rejected member's key is carried here.
    #[error("duplicate key: {0:?}")]
    DuplicateKey(String),

    /// The allocator could not satisfy a growth request. The structure
    /// keeps its prior state and remains usable.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// A duplicate key surfaced while rehashing during a resize. A table
    /// that held unique keys must stay duplicate-free under a pure rehash,
    /// so this indicates internal corruption.
    #[error("hash table corrupted: duplicate key during rehash")]
    CorruptTable,
}
