/// Contract tests for text emission: one canonical form per tag, key-sorted
/// objects, empty-container handling, and the documented no-escaping
/// limitation for string payloads.
use nodal_core::{node, Node};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn emit_null() {
    assert_eq!(Node::Null.to_text(), "null");
}

#[test]
fn emit_bool_as_numeral() {
    assert_eq!(Node::from(true).to_text(), "1");
    assert_eq!(Node::from(false).to_text(), "0");
}

#[test]
fn emit_string_quoted() {
    assert_eq!(Node::from("hello").to_text(), "\"hello\"");
    assert_eq!(Node::from("").to_text(), "\"\"");
}

#[test]
fn emit_string_does_not_escape() {
    // Documented limitation: payload text passes through verbatim.
    assert_eq!(Node::from("say \"hi\"").to_text(), "\"say \"hi\"\"");
    assert_eq!(Node::from("a,b").to_text(), "\"a,b\"");
}

#[test]
fn emit_numbers_in_native_form() {
    assert_eq!(Node::from(-42_i16).to_text(), "-42");
    assert_eq!(Node::from(42_u64).to_text(), "42");
    assert_eq!(Node::from(3.25_f64).to_text(), "3.25");
    assert_eq!(Node::from(u128::MAX).to_text(), u128::MAX.to_string());
}

#[test]
fn emit_preserves_integer_width_exactly() {
    assert_eq!(Node::from(i64::MIN).to_text(), i64::MIN.to_string());
    assert_eq!(Node::from(u64::MAX).to_text(), u64::MAX.to_string());
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn emit_array_in_positional_order() {
    let n = node!([1, "two", true, null]);
    assert_eq!(n.to_text(), r#"[1,"two",1,null]"#);
}

#[test]
fn emit_object_keys_sorted_regardless_of_insertion_order() {
    let mut forward = Node::new();
    forward.insert("a", 1);
    forward["b"] = node!([1, 2]);

    let mut reverse = Node::new();
    reverse["b"] = node!([1, 2]);
    reverse.insert("a", 1);

    assert_eq!(forward.to_text(), r#"{"a":1,"b":[1,2]}"#);
    assert_eq!(reverse.to_text(), r#"{"a":1,"b":[1,2]}"#);
}

#[test]
fn emit_empty_containers() {
    assert_eq!(node!([]).to_text(), "[]");
    assert_eq!(node!({}).to_text(), "{}");
}

#[test]
fn emit_empty_containers_nested() {
    let n = node!({ "arr": [], "obj": {} });
    assert_eq!(n.to_text(), r#"{"arr":[],"obj":{}}"#);
}

#[test]
fn emit_deeply_nested_tree() {
    let n = node!({
        "config": {
            "ports": [80, 443],
            "tls": true,
        },
        "aliases": [{ "name": "web" }],
    });
    assert_eq!(
        n.to_text(),
        r#"{"aliases":[{"name":"web"}],"config":{"ports":[80,443],"tls":1}}"#
    );
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn emit_writes_to_caller_supplied_sink() {
    let n = node!([1, 2]);
    let mut out = String::from("prefix:");
    n.emit(&mut out).unwrap();
    assert_eq!(out, "prefix:[1,2]");
}

#[test]
fn display_matches_to_text() {
    let n = node!({ "k": [false] });
    assert_eq!(format!("{n}"), n.to_text());
}
