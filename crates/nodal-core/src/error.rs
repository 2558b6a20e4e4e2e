//! Error types for bounds-checked tree access.

use thiserror::Error;

use crate::node::NodeKind;

/// Errors raised by the checked accessors [`Node::at`](crate::Node::at) and
/// [`Node::at_mut`](crate::Node::at_mut).
///
/// Only checked access fails. Permissive scalar reads return default values,
/// and the auto-vivifying operations retag the node instead of erroring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Positional access past the end of an array.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Keyed access for a key the object does not contain.
    #[error("key {key:?} not present in object")]
    KeyMissing { key: String },

    /// Positional access on a node that is not an array.
    #[error("node is {actual}, not an array")]
    NotAnArray { actual: NodeKind },

    /// Keyed access on a node that is not an object.
    #[error("node is {actual}, not an object")]
    NotAnObject { actual: NodeKind },
}

/// Convenience alias used throughout nodal-core.
pub type Result<T> = std::result::Result<T, AccessError>;
