//! Auto-vivifying and bounds-checked access into the tree.
//!
//! Two access surfaces share one index abstraction ([`TreeIndex`]):
//!
//! - **Permissive** — `node[idx]` / `node[key]`. Shared indexing never
//!   fails: a missing key or wrong tag reads as `Null`. Mutable keyed
//!   indexing *vivifies*: the node is retagged to an empty object if
//!   needed and the key inserted as `Null`, so `n["a"]["b"] = x` builds
//!   the intermediate layers by itself. Mutable positional indexing has a
//!   precondition (array tag, index in range) and panics when violated.
//! - **Checked** — [`Node::at`] / [`Node::at_mut`]. Never retags; fails
//!   with [`AccessError`] when the tag or index/key does not line up.
//!
//! Every destructive retag funnels through [`Node::ensure_array`] or
//! [`Node::ensure_object`], which implement the "last writer wins,
//! structurally" policy: whatever the node held before is discarded.

use std::collections::BTreeMap;
use std::ops;

use crate::error::{AccessError, Result};
use crate::node::Node;

static NULL: Node = Node::Null;

impl Node {
    /// Retag this node as an array if it is not one already, discarding any
    /// previous payload, and return the element vector.
    pub fn ensure_array(&mut self) -> &mut Vec<Node> {
        if !self.is_array() {
            *self = Node::Array(Vec::new());
        }
        match self {
            Node::Array(items) => items,
            _ => unreachable!("just retagged as array"),
        }
    }

    /// Retag this node as an object if it is not one already, discarding any
    /// previous payload, and return the member map.
    pub fn ensure_object(&mut self) -> &mut BTreeMap<String, Node> {
        if !self.is_object() {
            *self = Node::Object(BTreeMap::new());
        }
        match self {
            Node::Object(members) => members,
            _ => unreachable!("just retagged as object"),
        }
    }

    /// Append to the array payload.
    ///
    /// A node that is not an array becomes a fresh single-element array
    /// holding only the pushed value.
    ///
    /// ```
    /// use nodal_core::Node;
    ///
    /// let mut n = Node::new();
    /// n.push(1);
    /// n.push("two");
    /// assert_eq!(n.len(), 2);
    /// ```
    pub fn push(&mut self, value: impl Into<Node>) {
        self.ensure_array().push(value.into());
    }

    /// Insert at `pos`, shifting later elements.
    ///
    /// On an array, `pos` must be `<= len` (panics otherwise). On any other
    /// tag the node becomes a fresh single-element array and `pos` is
    /// ignored, matching the destructive conversion of [`push`](Node::push).
    pub fn insert_at(&mut self, pos: usize, value: impl Into<Node>) {
        match self {
            Node::Array(items) => items.insert(pos, value.into()),
            _ => *self = Node::Array(vec![value.into()]),
        }
    }

    /// Insert or overwrite `key` in the object payload.
    ///
    /// A node that is not an object becomes a fresh single-key object
    /// holding only this entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
        self.ensure_object().insert(key.into(), value.into());
    }

    /// Mutable handle to the member at `key`, vivifying as needed.
    ///
    /// Retags the node as an object if necessary and inserts a `Null`
    /// member when the key is absent. `node[key] = x` on a mutable node is
    /// sugar for `*node.entry(key) = x`.
    pub fn entry(&mut self, key: impl Into<String>) -> &mut Node {
        self.ensure_object().entry(key.into()).or_insert(Node::Null)
    }

    /// Bounds-checked access by index or key. Never retags.
    ///
    /// ```
    /// use nodal_core::{AccessError, Node};
    ///
    /// let mut n = Node::new();
    /// n.push(10);
    /// assert_eq!(n.at(0).unwrap().get::<i32>(), 10);
    /// assert!(matches!(n.at(3), Err(AccessError::IndexOutOfRange { .. })));
    /// assert!(matches!(n.at("k"), Err(AccessError::NotAnObject { .. })));
    /// ```
    pub fn at<I: TreeIndex>(&self, index: I) -> Result<&Node> {
        index.index_into(self)
    }

    /// Mutable bounds-checked access by index or key. Never retags.
    pub fn at_mut<I: TreeIndex>(&mut self, index: I) -> Result<&mut Node> {
        index.index_into_mut(self)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<'a, T: Sealed + ?Sized> Sealed for &'a T {}
}

/// A type usable to index into a [`Node`]: `usize` for arrays, string types
/// for objects. Sealed; modeled on `serde_json::value::Index`.
pub trait TreeIndex: private::Sealed {
    /// Checked shared access.
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node>;

    /// Checked mutable access.
    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node>;

    /// Vivifying mutable access; may retag `node`. Panics where the
    /// operation has a precondition instead of a conversion.
    fn index_or_insert<'a>(&self, node: &'a mut Node) -> &'a mut Node;
}

impl TreeIndex for usize {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        match node {
            Node::Array(items) => items.get(*self).ok_or(AccessError::IndexOutOfRange {
                index: *self,
                len: items.len(),
            }),
            other => Err(AccessError::NotAnArray {
                actual: other.kind(),
            }),
        }
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        match node {
            Node::Array(items) => {
                let len = items.len();
                items
                    .get_mut(*self)
                    .ok_or(AccessError::IndexOutOfRange { index: *self, len })
            }
            other => Err(AccessError::NotAnArray {
                actual: other.kind(),
            }),
        }
    }

    fn index_or_insert<'a>(&self, node: &'a mut Node) -> &'a mut Node {
        // Positional mutation does not vivify: an absent slot has no
        // well-defined fill order, so out-of-range or wrong-tag access is a
        // caller error.
        match node {
            Node::Array(items) => {
                let len = items.len();
                items.get_mut(*self).unwrap_or_else(|| {
                    panic!("cannot index array of length {len} with {self}")
                })
            }
            other => panic!("cannot index {} with a position", other.kind()),
        }
    }
}

impl TreeIndex for str {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        match node {
            Node::Object(members) => members.get(self).ok_or_else(|| AccessError::KeyMissing {
                key: self.to_owned(),
            }),
            other => Err(AccessError::NotAnObject {
                actual: other.kind(),
            }),
        }
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        match node {
            Node::Object(members) => {
                members.get_mut(self).ok_or_else(|| AccessError::KeyMissing {
                    key: self.to_owned(),
                })
            }
            other => Err(AccessError::NotAnObject {
                actual: other.kind(),
            }),
        }
    }

    fn index_or_insert<'a>(&self, node: &'a mut Node) -> &'a mut Node {
        node.entry(self)
    }
}

impl TreeIndex for String {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        self.as_str().index_into(node)
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        self.as_str().index_into_mut(node)
    }

    fn index_or_insert<'a>(&self, node: &'a mut Node) -> &'a mut Node {
        self.as_str().index_or_insert(node)
    }
}

impl<'b, T: TreeIndex + ?Sized> TreeIndex for &'b T {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        (**self).index_into(node)
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        (**self).index_into_mut(node)
    }

    fn index_or_insert<'a>(&self, node: &'a mut Node) -> &'a mut Node {
        (**self).index_or_insert(node)
    }
}

/// Shared indexing reads permissively: any miss (wrong tag, absent key,
/// out-of-range position) yields `Null` rather than a panic or error.
impl<I: TreeIndex> ops::Index<I> for Node {
    type Output = Node;

    fn index(&self, index: I) -> &Node {
        index.index_into(self).unwrap_or(&NULL)
    }
}

/// Mutable indexing vivifies for keys and enforces the positional
/// precondition for `usize` (see [`TreeIndex::index_or_insert`]).
impl<I: TreeIndex> ops::IndexMut<I> for Node {
    fn index_mut(&mut self, index: I) -> &mut Node {
        index.index_or_insert(self)
    }
}
