use serde_lispify::{encode, lisp, to_value, Error, LispMap, Number, Value};
use std::collections::BTreeMap;

#[test]
fn test_lisp_macro_null() {
    let value = lisp!(null);
    assert_eq!(value, Value::Null);
    assert_eq!(encode(value).unwrap(), "nil");
}

#[test]
fn test_lisp_macro_booleans() {
    assert_eq!(lisp!(true), Value::Bool(true));
    assert_eq!(lisp!(false), Value::Bool(false));
    assert_eq!(encode(lisp!(true)).unwrap(), "t");
}

#[test]
fn test_lisp_macro_numbers() {
    assert_eq!(lisp!(42), Value::Number(Number::Integer(42)));
    assert_eq!(lisp!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(lisp!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_lisp_macro_strings() {
    assert_eq!(lisp!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(encode(lisp!("")).unwrap(), "\"\"");
    assert_eq!(encode(lisp!(":keyword")).unwrap(), ":keyword");
}

#[test]
fn test_lisp_macro_sequences() {
    assert_eq!(encode(lisp!([])).unwrap(), "()");
    assert_eq!(encode(lisp!([1, 2, 3])).unwrap(), "(1 2 3)");
    assert_eq!(
        encode(lisp!([[0, "foo"], [1, "bar"]])).unwrap(),
        "((0 \"foo\") (1 \"bar\"))"
    );
}

#[test]
fn test_lisp_macro_mappings() {
    assert_eq!(lisp!({}), Value::Mapping(LispMap::new()));

    let value = lisp!({
        "b": "foo",
        "a": 1,
        "c": null,
    });
    assert_eq!(encode(value).unwrap(), "(:a 1 :b \"foo\")");
}

#[test]
fn test_lisp_macro_date() {
    let value = lisp!({
        "yyyymmdd": "19491001",
        "html": "Oct 1, 1949"
    });
    assert_eq!(
        encode(value).unwrap(),
        "(:html \"Oct 1, 1949\" :yyyymmdd 19491001)"
    );
}

#[test]
fn test_lisp_macro_nested() {
    let value = lisp!({
        "name": "Ada Lovelace",
        "gender": ":feminine",
        "children": ["Byron", "Anne", "Ralph"],
        "birth": {
            "yyyymmdd": "18151210"
        }
    });
    assert_eq!(
        encode(value).unwrap(),
        "(:birth (:yyyymmdd 18151210) :children (\"Byron\" \"Anne\" \"Ralph\") \
         :gender :feminine :name \"Ada Lovelace\")"
    );
}

#[test]
fn test_lisp_macro_expressions() {
    let tags = vec!["rust".to_string(), "lisp".to_string()];
    let value = lisp!(tags);
    assert_eq!(encode(value).unwrap(), "(\"rust\" \"lisp\")");

    let missing: Option<u8> = None;
    assert_eq!(lisp!(missing), Value::Null);
}

#[test]
fn test_lisp_macro_negative_numbers_in_place() {
    assert_eq!(encode(lisp!([-1, 2, -3])).unwrap(), "(-1 2 -3)");
    assert_eq!(
        encode(lisp!({"k": -1, "nested": [-2.5, {"z": -0}]})).unwrap(),
        "(:k -1 :nested (-2.5 (:z 0)))"
    );
}

#[test]
fn test_lisp_macro_expression_elements() {
    let name = "Ada";
    let count = 3;
    assert_eq!(
        encode(lisp!([name, count * 2, ":kw"])).unwrap(),
        "(\"Ada\" 6 :kw)"
    );
    assert_eq!(
        encode(lisp!({"name": name, "next": count + 1})).unwrap(),
        "(:name \"Ada\" :next 4)"
    );
}

#[test]
#[should_panic(expected = "Invalid mapping key")]
fn test_lisp_macro_rejects_integer_keys() {
    let mut by_id = BTreeMap::new();
    by_id.insert(1, "one");
    let _ = lisp!(by_id);
}

#[test]
#[should_panic(expected = "Invalid mapping key")]
fn test_lisp_macro_rejects_integer_keys_when_nested() {
    let mut by_id = BTreeMap::new();
    by_id.insert(1, "one");
    let _ = lisp!({"index": by_id});
}

#[test]
fn test_integer_keys_fail_through_to_value() {
    let mut by_id = BTreeMap::new();
    by_id.insert(1, "one");
    assert!(matches!(to_value(&by_id), Err(Error::InvalidKey(_))));
}
