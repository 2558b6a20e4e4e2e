//! The [`node!`] construction macro.
//!
//! Bracketed sequences and key-value mappings in source text build the
//! corresponding tree in one expression, the way initializer lists would in
//! a dynamic language. TT-muncher structure follows `serde_json::json!`,
//! reduced to this crate's two container shapes.

/// Build a [`Node`](crate::Node) from a literal tree description.
///
/// ```
/// use nodal_core::node;
///
/// let n = node!({
///     "name": "arrays",
///     "sizes": [1, 2, 3],
///     "nested": { "ok": true },
/// });
/// assert_eq!(n["sizes"][1_usize].get::<i32>(), 2);
/// ```
///
/// Value positions accept `null`, booleans, nested `[...]`/`{...}`, and any
/// expression convertible into a `Node`. Trailing commas are allowed.
#[macro_export]
macro_rules! node {
    ($($node:tt)+) => {
        $crate::node_internal!($($node)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! node_internal {
    // ------------------------------------------------------------------
    // @array: munch a comma-separated list of elements into [$($elems,)*]
    // ------------------------------------------------------------------

    // Done with trailing comma.
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };

    // Done without trailing comma.
    (@array [$($elems:expr),*]) => {
        vec![$($elems),*]
    };

    // Next element is `null`.
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!(null)] $($rest)*)
    };

    // Next element is `true`.
    (@array [$($elems:expr,)*] true $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!(true)] $($rest)*)
    };

    // Next element is `false`.
    (@array [$($elems:expr,)*] false $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!(false)] $($rest)*)
    };

    // Next element is an array.
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!([$($array)*])] $($rest)*)
    };

    // Next element is a map.
    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!({$($map)*})] $($rest)*)
    };

    // Next element is an expression followed by a comma.
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!($next),] $($rest)*)
    };

    // Last element is an expression with no trailing comma.
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::node_internal!(@array [$($elems,)* $crate::node_internal!($last)])
    };

    // Comma after the most recent element.
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::node_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Unexpected token after an element.
    (@array [$($elems:expr),*] $unexpected:tt $($rest:tt)*) => {
        $crate::node_unexpected!($unexpected)
    };

    // ------------------------------------------------------------------
    // @object: munch `key: value` pairs into an ident holding a BTreeMap.
    // State: (partial key tokens) (remaining input) (copy of input for errors)
    // ------------------------------------------------------------------

    // Done.
    (@object $object:ident () () ()) => {};

    // Insert the current entry, trailing comma present.
    (@object $object:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        let _ = $object.insert(($($key)+).into(), $value);
        $crate::node_internal!(@object $object () ($($rest)*) ($($rest)*));
    };

    // Current entry followed by an unexpected token.
    (@object $object:ident [$($key:tt)+] ($value:expr) $unexpected:tt $($rest:tt)*) => {
        $crate::node_unexpected!($unexpected);
    };

    // Insert the last entry, no trailing comma.
    (@object $object:ident [$($key:tt)+] ($value:expr)) => {
        let _ = $object.insert(($($key)+).into(), $value);
    };

    // Next value is `null`.
    (@object $object:ident ($($key:tt)+) (: null $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!(null)) $($rest)*);
    };

    // Next value is `true`.
    (@object $object:ident ($($key:tt)+) (: true $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!(true)) $($rest)*);
    };

    // Next value is `false`.
    (@object $object:ident ($($key:tt)+) (: false $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!(false)) $($rest)*);
    };

    // Next value is an array.
    (@object $object:ident ($($key:tt)+) (: [$($array:tt)*] $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!([$($array)*])) $($rest)*);
    };

    // Next value is a map.
    (@object $object:ident ($($key:tt)+) (: {$($map:tt)*} $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!({$($map)*})) $($rest)*);
    };

    // Next value is an expression followed by a comma.
    (@object $object:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!($value)) , $($rest)*);
    };

    // Last value is an expression, no trailing comma.
    (@object $object:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        $crate::node_internal!(@object $object [$($key)+] ($crate::node_internal!($value)));
    };

    // Missing value for the last entry.
    (@object $object:ident ($($key:tt)+) (:) $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::node_internal!();
    };

    // Missing colon and value for the last entry.
    (@object $object:ident ($($key:tt)+) () $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::node_internal!();
    };

    // Misplaced colon (no key yet).
    (@object $object:ident () (: $($rest:tt)*) ($colon:tt $($copy:tt)*)) => {
        $crate::node_unexpected!($colon);
    };

    // Comma inside a key.
    (@object $object:ident ($($key:tt)*) (, $($rest:tt)*) ($comma:tt $($copy:tt)*)) => {
        $crate::node_unexpected!($comma);
    };

    // Key is fully parenthesized (computed key expression).
    (@object $object:ident () (($key:expr) : $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object ($key) (: $($rest)*) $copy);
    };

    // Munch a token into the current key.
    (@object $object:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        $crate::node_internal!(@object $object ($($key)* $tt) ($($rest)*) $copy);
    };

    // ------------------------------------------------------------------
    // Primary entry points.
    // ------------------------------------------------------------------

    (null) => {
        $crate::Node::Null
    };

    (true) => {
        $crate::Node::Bool(true)
    };

    (false) => {
        $crate::Node::Bool(false)
    };

    ([]) => {
        $crate::Node::Array(::std::vec::Vec::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Node::Array($crate::node_internal!(@array [] $($tt)+))
    };

    ({}) => {
        $crate::Node::Object(::std::collections::BTreeMap::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Node::Object({
            let mut object = ::std::collections::BTreeMap::new();
            $crate::node_internal!(@object object () ($($tt)+) ($($tt)+));
            object
        })
    };

    // Any Into<Node> expression.
    ($other:expr) => {
        $crate::Node::from($other)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! node_unexpected {
    () => {};
}
