//! The polymorphic tree value at the center of the crate.
//!
//! A [`Node`] is a tagged sum over six payloads: null, boolean, number,
//! string, ordered array, and key-sorted object. Exactly one payload exists
//! at a time; retagging a node replaces the whole value, so stale payloads
//! from a previous tag cannot leak. Objects are backed by `BTreeMap`, which
//! fixes iteration (and therefore emission) order to lexicographic key
//! order regardless of insertion order.
//!
//! Scalar reads are permissive: asking a node for a type it does not hold
//! returns that type's default value instead of failing. The checked
//! `as_*` accessors return `Option` for callers that need to distinguish.

use std::collections::BTreeMap;
use std::fmt;

use crate::number::{Number, NumberCast};

/// A dynamically-typed tree value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(BTreeMap<String, Node>),
}

/// The discriminant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "a boolean",
            NodeKind::Number => "a number",
            NodeKind::String => "a string",
            NodeKind::Array => "an array",
            NodeKind::Object => "an object",
        };
        f.write_str(name)
    }
}

impl Node {
    /// A fresh node; born `Null`.
    pub fn new() -> Self {
        Node::Null
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Number(_) => NodeKind::Number,
            Node::String(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Empty the active String/Array/Object payload in place.
    ///
    /// The tag is left untouched: clearing an array yields an empty array,
    /// not a null. Null/Bool/Number nodes are unaffected.
    pub fn clear(&mut self) {
        match self {
            Node::String(s) => s.clear(),
            Node::Array(items) => items.clear(),
            Node::Object(members) => members.clear(),
            _ => {}
        }
    }

    /// Element count for Array/Object, byte length for String, 0 otherwise.
    pub fn len(&self) -> usize {
        match self {
            Node::String(s) => s.len(),
            Node::Array(items) => items.len(),
            Node::Object(members) => members.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the node as an arithmetic value.
    ///
    /// Dispatches on the stored number's representation and converts with
    /// `as` cast semantics. A node that is not a number reads as `T`'s zero
    /// value; this never fails.
    ///
    /// ```
    /// use nodal_core::Node;
    ///
    /// let n = Node::from(300_u16);
    /// assert_eq!(n.get::<u16>(), 300);
    /// assert_eq!(n.get::<u8>(), 300_u16 as u8);
    /// assert_eq!(Node::Null.get::<i32>(), 0);
    /// ```
    pub fn get<T: NumberCast + Default>(&self) -> T {
        match self {
            Node::Number(n) => n.get(),
            _ => T::default(),
        }
    }

    /// Read the node as a boolean; `false` unless the tag is Bool.
    pub fn as_bool(&self) -> bool {
        match self {
            Node::Bool(b) => *b,
            _ => false,
        }
    }

    /// Read the node as a string slice; `""` unless the tag is String.
    pub fn as_str(&self) -> &str {
        match self {
            Node::String(s) => s,
            _ => "",
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Bool(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::String(v.to_owned())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::String(v)
    }
}

impl From<Number> for Node {
    fn from(v: Number) -> Self {
        Node::Number(v)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Node::Null,
        }
    }
}

macro_rules! impl_from_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Node {
            fn from(v: $ty) -> Self {
                Node::Number(Number::from(v))
            }
        }
    )*};
}

impl_from_numeric!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

/// Sequence assignment: a vector of convertible values becomes an Array.
impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(v: [T; N]) -> Self {
        Node::Array(v.into_iter().map(Into::into).collect())
    }
}

/// Mapping assignment: key-value pairs become a key-sorted Object.
impl<V: Into<Node>> From<BTreeMap<String, V>> for Node {
    fn from(v: BTreeMap<String, V>) -> Self {
        Node::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Node>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Node::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Node::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn born_null() {
        assert!(Node::new().is_null());
        assert_eq!(Node::default().kind(), NodeKind::Null);
    }

    #[test]
    fn clear_keeps_tag() {
        let mut n = Node::from("hello");
        n.clear();
        assert!(n.is_string());
        assert_eq!(n.len(), 0);
    }

    #[test]
    fn scalar_reads_default_on_mismatch() {
        let n = Node::from(true);
        assert_eq!(n.get::<i32>(), 0);
        assert_eq!(n.as_str(), "");
        assert!(!Node::from(42).as_bool());
    }
}
