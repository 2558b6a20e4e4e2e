//! # nodal-core
//!
//! An in-memory, dynamically-typed tree value — one polymorphic [`Node`]
//! covering null, boolean, number (with remembered width and signedness),
//! string, ordered array, and key-sorted object — plus auto-vivifying
//! access for building trees without declaring structure up front, and a
//! single-pass text emitter.
//!
//! ## Quick start
//!
//! ```rust
//! use nodal_core::{node, Node};
//!
//! // Build through chained indexing: intermediate objects appear on demand.
//! let mut n = Node::new();
//! n["server"]["port"] = 8080.into();
//! n["server"]["tls"] = true.into();
//! n["tags"].push("fast");
//!
//! assert_eq!(
//!     n.to_text(),
//!     r#"{"server":{"port":8080,"tls":1},"tags":["fast"]}"#
//! );
//!
//! // Or all at once with the literal macro.
//! let m = node!({ "server": { "port": 8080, "tls": true }, "tags": ["fast"] });
//! assert_eq!(m, n);
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the [`Node`] sum type: tags, payloads, permissive scalar reads
//! - [`number`] — [`Number`] payloads with remembered representation, cast-on-read
//! - [`access`] — auto-vivifying `[]` access, `push`/`insert`, checked `at`/`at_mut`
//! - [`emit`] — recursive text emission (`emit`, `to_text`, `Display`)
//! - [`json`] — serde interop (`Serialize`, `serde_json::Value` conversions)
//! - [`error`] — [`AccessError`] for checked access failures

pub mod access;
pub mod emit;
pub mod error;
pub mod json;
mod macros;
pub mod node;
pub mod number;

pub use access::TreeIndex;
pub use error::{AccessError, Result};
pub use node::{Node, NodeKind};
pub use number::{Number, NumberCast, NumberKind};
