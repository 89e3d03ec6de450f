/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use serde_lispify::{encode, lisp};
///
/// let value = lisp!({
///     "name": "Alice",
///     "gender": ":feminine",
///     "tags": ["rust", "lisp"],
///     "offset": -1,
///     "spouse": null
/// });
/// assert_eq!(
///     encode(value).unwrap().to_text(),
///     "(:gender :feminine :name \"Alice\" :offset -1 :tags (\"rust\" \"lisp\"))"
/// );
/// ```
///
/// Any other expression is converted with [`to_value`](crate::to_value).
///
/// # Panics
///
/// Panics if an interpolated expression cannot be converted, for instance a map
/// with integer keys. Call [`to_value`](crate::to_value) directly to handle that
/// error instead.
#[macro_export]
macro_rules! lisp {
    // Sequence elements, accumulated in `[...]`
    (@seq [$($done:expr,)*]) => {
        vec![$($done),*]
    };

    (@seq [$($done:expr,)*] , $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)*] $($rest)*)
    };

    (@seq [$($done:expr,)*] null $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::Value::Null,] $($rest)*)
    };

    (@seq [$($done:expr,)*] true $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::Value::Bool(true),] $($rest)*)
    };

    (@seq [$($done:expr,)*] false $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::Value::Bool(false),] $($rest)*)
    };

    (@seq [$($done:expr,)*] [$($inner:tt)*] $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::lisp!([$($inner)*]),] $($rest)*)
    };

    (@seq [$($done:expr,)*] {$($inner:tt)*} $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::lisp!({$($inner)*}),] $($rest)*)
    };

    (@seq [$($done:expr,)*] $next:expr , $($rest:tt)*) => {
        $crate::lisp!(@seq [$($done,)* $crate::lisp!(@expr $next),] $($rest)*)
    };

    (@seq [$($done:expr,)*] $last:expr) => {
        $crate::lisp!(@seq [$($done,)* $crate::lisp!(@expr $last),])
    };

    // Mapping entries, inserted into `$map` one by one
    (@map $map:ident) => {};

    (@map $map:ident , $($rest:tt)*) => {
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : null $($rest:tt)*) => {
        $map.insert($key, $crate::Value::Null);
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : true $($rest:tt)*) => {
        $map.insert($key, $crate::Value::Bool(true));
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : false $($rest:tt)*) => {
        $map.insert($key, $crate::Value::Bool(false));
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : [$($inner:tt)*] $($rest:tt)*) => {
        $map.insert($key, $crate::lisp!([$($inner)*]));
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : {$($inner:tt)*} $($rest:tt)*) => {
        $map.insert($key, $crate::lisp!({$($inner)*}));
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : $value:expr , $($rest:tt)*) => {
        $map.insert($key, $crate::lisp!(@expr $value));
        $crate::lisp!(@map $map $($rest)*);
    };

    (@map $map:ident $key:literal : $value:expr) => {
        $map.insert($key, $crate::lisp!(@expr $value));
    };

    (@expr $value:expr) => {
        match $crate::to_value(&$value) {
            Ok(value) => value,
            Err(err) => panic!("lisp!: cannot convert `{}`: {}", stringify!($value), err),
        }
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elems:tt)+ ]) => {
        $crate::Value::Sequence($crate::lisp!(@seq [] $($elems)+))
    };

    ({}) => {
        $crate::Value::Mapping($crate::LispMap::new())
    };

    ({ $($entries:tt)+ }) => {{
        let mut mapping = $crate::LispMap::new();
        $crate::lisp!(@map mapping $($entries)+);
        $crate::Value::Mapping(mapping)
    }};

    ($other:expr) => {
        $crate::lisp!(@expr $other)
    };
}
