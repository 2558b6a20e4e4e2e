//! serde interop.
//!
//! [`Node`] owns its tree, but the surrounding ecosystem speaks
//! `serde_json::Value`. This module provides the boundary: `Node`
//! serializes into the serde data model (booleans stay booleans here; the
//! `0`/`1` rendering belongs to the text emitter alone), and lossy-free
//! conversions exist in both directions wherever the two models line up.
//!
//! There is deliberately no `Deserialize` impl: emission is write-only, and
//! a serde deserializer would amount to a parser through the back door.

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::node::Node;
use crate::number::Number;

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I8(v) => serializer.serialize_i8(v),
            Number::I16(v) => serializer.serialize_i16(v),
            Number::I32(v) => serializer.serialize_i32(v),
            Number::I64(v) => serializer.serialize_i64(v),
            Number::I128(v) => serializer.serialize_i128(v),
            Number::U8(v) => serializer.serialize_u8(v),
            Number::U16(v) => serializer.serialize_u16(v),
            Number::U32(v) => serializer.serialize_u32(v),
            Number::U64(v) => serializer.serialize_u64(v),
            Number::U128(v) => serializer.serialize_u128(v),
            Number::F32(v) => serializer.serialize_f32(v),
            Number::F64(v) => serializer.serialize_f64(v),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(items) => serializer.collect_seq(items),
            Node::Object(members) => serializer.collect_map(members),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => {
                // serde_json classifies every number as i64, u64, or f64.
                if let Some(i) = n.as_i64() {
                    Node::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Node::Number(Number::U64(u))
                } else {
                    Node::Number(Number::F64(n.as_f64().unwrap_or(0.0)))
                }
            }
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(members) => Node::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => number_to_value(n),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}

/// JSON numbers are at most 64 bits wide; 128-bit values outside that range
/// degrade through `f64`, and non-finite floats map to `Null` (serde_json's
/// own convention).
fn number_to_value(n: &Number) -> Value {
    match *n {
        Number::I8(v) => Value::from(i64::from(v)),
        Number::I16(v) => Value::from(i64::from(v)),
        Number::I32(v) => Value::from(i64::from(v)),
        Number::I64(v) => Value::from(v),
        Number::I128(v) => i64::try_from(v)
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(v as f64)),
        Number::U8(v) => Value::from(u64::from(v)),
        Number::U16(v) => Value::from(u64::from(v)),
        Number::U32(v) => Value::from(u64::from(v)),
        Number::U64(v) => Value::from(v),
        Number::U128(v) => u64::try_from(v)
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(v as f64)),
        Number::F32(v) => Value::from(f64::from(v)),
        Number::F64(v) => Value::from(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrip_shape() {
        let value: Value = serde_json::json!({"a": 1, "b": [true, "x"]});
        let node = Node::from(value.clone());
        assert!(node.is_object());
        assert_eq!(node["a"].get::<i64>(), 1);
        assert_eq!(Value::from(&node), value);
    }

    #[test]
    fn wide_integers_degrade_past_u64() {
        let n = Number::U128(u128::from(u64::MAX) + 1);
        assert!(number_to_value(&n).is_f64());
        let exact = Number::I128(-5);
        assert_eq!(number_to_value(&exact), Value::from(-5_i64));
    }
}
