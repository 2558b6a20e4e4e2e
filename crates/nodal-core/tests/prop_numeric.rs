/// Property-based tests for the numeric subtype subsystem and tree shape
/// invariants.
///
/// Uses the `proptest` crate to verify, over randomly generated values:
/// - reading a number as any arithmetic type equals the native `as` cast of
///   the originally assigned value (read-time conversion, all 12x12 pairs);
/// - cloning preserves the exact stored value and its representation kind;
/// - object members always iterate in sorted key order, whatever the
///   insertion order;
/// - chained keyed vivification builds a path that reads back intact.
///
/// Float strategies stay within finite ranges: NaN has no meaningful
/// equality and the cast contract is already pinned by the range cases.
use nodal_core::{Node, Number};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i8>().prop_map(Number::from),
        any::<i16>().prop_map(Number::from),
        any::<i32>().prop_map(Number::from),
        any::<i64>().prop_map(Number::from),
        any::<i128>().prop_map(Number::from),
        any::<u8>().prop_map(Number::from),
        any::<u16>().prop_map(Number::from),
        any::<u32>().prop_map(Number::from),
        any::<u64>().prop_map(Number::from),
        any::<u128>().prop_map(Number::from),
        (-1.0e6_f32..1.0e6_f32).prop_map(Number::from),
        (-1.0e9_f64..1.0e9_f64).prop_map(Number::from),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,11}"
}

// ============================================================================
// Property 1: read-as equals the native cast of the assigned value
// ============================================================================

macro_rules! assert_cast_matrix {
    ($v:ident) => {{
        let n = Node::from($v);
        prop_assert_eq!(n.get::<i8>(), $v as i8);
        prop_assert_eq!(n.get::<i16>(), $v as i16);
        prop_assert_eq!(n.get::<i32>(), $v as i32);
        prop_assert_eq!(n.get::<i64>(), $v as i64);
        prop_assert_eq!(n.get::<i128>(), $v as i128);
        prop_assert_eq!(n.get::<u8>(), $v as u8);
        prop_assert_eq!(n.get::<u16>(), $v as u16);
        prop_assert_eq!(n.get::<u32>(), $v as u32);
        prop_assert_eq!(n.get::<u64>(), $v as u64);
        prop_assert_eq!(n.get::<u128>(), $v as u128);
        prop_assert_eq!(n.get::<f32>(), $v as f32);
        prop_assert_eq!(n.get::<f64>(), $v as f64);
    }};
}

proptest! {
    #[test]
    fn i8_reads_as_native_casts(v in any::<i8>()) { assert_cast_matrix!(v) }

    #[test]
    fn i16_reads_as_native_casts(v in any::<i16>()) { assert_cast_matrix!(v) }

    #[test]
    fn i32_reads_as_native_casts(v in any::<i32>()) { assert_cast_matrix!(v) }

    #[test]
    fn i64_reads_as_native_casts(v in any::<i64>()) { assert_cast_matrix!(v) }

    #[test]
    fn i128_reads_as_native_casts(v in any::<i128>()) { assert_cast_matrix!(v) }

    #[test]
    fn u8_reads_as_native_casts(v in any::<u8>()) { assert_cast_matrix!(v) }

    #[test]
    fn u16_reads_as_native_casts(v in any::<u16>()) { assert_cast_matrix!(v) }

    #[test]
    fn u32_reads_as_native_casts(v in any::<u32>()) { assert_cast_matrix!(v) }

    #[test]
    fn u64_reads_as_native_casts(v in any::<u64>()) { assert_cast_matrix!(v) }

    #[test]
    fn u128_reads_as_native_casts(v in any::<u128>()) { assert_cast_matrix!(v) }

    #[test]
    fn f32_reads_as_native_casts(v in -1.0e6_f32..1.0e6_f32) { assert_cast_matrix!(v) }

    #[test]
    fn f64_reads_as_native_casts(v in -1.0e9_f64..1.0e9_f64) { assert_cast_matrix!(v) }
}

// ============================================================================
// Property 2: deep copy preserves exact value and kind
// ============================================================================

proptest! {
    #[test]
    fn clone_preserves_number_value_and_kind(n in arb_number()) {
        let node = Node::from(n);
        let copy = node.clone();
        prop_assert_eq!(copy.as_number(), Some(&n));
        prop_assert_eq!(copy.as_number().unwrap().kind(), n.kind());
    }
}

// ============================================================================
// Tree shape invariants
// ============================================================================

proptest! {
    #[test]
    fn object_members_iterate_in_sorted_key_order(
        keys in prop::collection::vec(arb_key(), 1..10)
    ) {
        let mut node = Node::new();
        for (i, key) in keys.iter().enumerate() {
            node.insert(key.clone(), i as i64);
        }
        let members = node.as_object().unwrap();
        let collected: Vec<&String> = members.keys().collect();
        let mut sorted = collected.clone();
        sorted.sort();
        prop_assert_eq!(collected, sorted);
    }

    #[test]
    fn keyed_vivification_path_reads_back(
        path in prop::collection::vec(arb_key(), 1..6),
        leaf in any::<i64>()
    ) {
        let mut root = Node::new();
        {
            let mut cursor = &mut root;
            for key in &path {
                cursor = cursor.entry(key.clone());
            }
            *cursor = Node::from(leaf);
        }
        let mut cursor = &root;
        for key in &path {
            prop_assert!(cursor.is_object());
            cursor = &cursor[key.as_str()];
        }
        prop_assert_eq!(cursor.get::<i64>(), leaf);
    }
}
