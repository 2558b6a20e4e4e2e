//! Text emission — a single recursive pass from tree to sink.
//!
//! The output is JSON-shaped with two deliberate deviations inherited from
//! the format this crate renders:
//!
//! - Booleans emit as the numerals `0`/`1`, not `true`/`false`.
//! - String payloads are wrapped in double quotes but **not escaped**; a
//!   payload containing `"` produces output that will not re-parse. The
//!   emitter is write-only, so no parser on this side depends on it.
//!
//! Object members always emit in lexicographic key order (that is simply
//! the `BTreeMap` iteration order), and empty containers emit `[]`/`{}`.

use std::fmt::{self, Write};

use crate::node::Node;

impl Node {
    /// Write the textual form of this tree into `out`.
    ///
    /// One synchronous recursive pass; no buffering beyond the sink itself.
    ///
    /// ```
    /// use nodal_core::node;
    ///
    /// let n = node!({ "b": [1, 2], "a": 1 });
    /// let mut out = String::new();
    /// n.emit(&mut out).unwrap();
    /// assert_eq!(out, r#"{"a":1,"b":[1,2]}"#);
    /// ```
    pub fn emit<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Node::Null => out.write_str("null"),
            Node::Bool(b) => out.write_str(if *b { "1" } else { "0" }),
            Node::Number(n) => write!(out, "{n}"),
            Node::String(s) => write!(out, "\"{s}\""),
            Node::Array(items) => {
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    item.emit(out)?;
                }
                out.write_char(']')
            }
            Node::Object(members) => {
                out.write_char('{')?;
                for (i, (key, value)) in members.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    write!(out, "\"{key}\":")?;
                    value.emit(out)?;
                }
                out.write_char('}')
            }
        }
    }

    /// The textual form as an owned `String`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.emit(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(Node::Null.to_text(), "null");
        assert_eq!(Node::from(true).to_text(), "1");
        assert_eq!(Node::from(false).to_text(), "0");
        assert_eq!(Node::from("hi").to_text(), "\"hi\"");
    }

    #[test]
    fn empty_containers() {
        let mut a = Node::new();
        a.ensure_array();
        assert_eq!(a.to_text(), "[]");
        let mut o = Node::new();
        o.ensure_object();
        assert_eq!(o.to_text(), "{}");
    }
}
