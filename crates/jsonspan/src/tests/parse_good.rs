use rstest::rstest;

use crate::{Array, Map, Number, ParserOptions, Value, parse, parse_with_options, validate};

fn obj(members: &[(&str, Value)]) -> Value {
    Value::Object(members.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect())
}

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Bool(true))]
#[case(" \t\r\nfalse\n", Value::Bool(false))]
#[case("0", Value::from(0))]
#[case("-17", Value::from(-17))]
#[case("0.5", Value::from(0.5))]
#[case("1E2", Value::from(100.0))]
#[case("2.5e-1", Value::from(0.25))]
#[case(r#""""#, Value::from(""))]
#[case(r#""\u0041""#, Value::from("A"))]
#[case(r#""\uD83D\uDE00""#, Value::from("\u{1F600}"))]
#[case(r#""café \/ \"ok\"""#, Value::from("café / \"ok\""))]
#[case("\"日本語\"", Value::from("日本語"))]
#[case("[]", Value::Array(Array::new()))]
#[case("{}", Value::Object(Map::new()))]
#[case("[1, [2, [3]], {}]", Value::Array(vec![
    Value::from(1),
    Value::Array(vec![Value::from(2), Value::Array(vec![Value::from(3)])]),
    Value::Object(Map::new()),
]))]
#[case(r#"{"a": {"b": [null, true]}, "c": "d"}"#, obj(&[
    ("a", obj(&[("b", Value::Array(vec![Value::Null, Value::Bool(true)]))])),
    ("c", Value::from("d")),
]))]
fn parses(#[case] text: &str, #[case] expected: Value) {
    assert_eq!(parse(text.as_bytes()).unwrap(), expected);
    assert!(validate(text.as_bytes()).is_ok());
}

#[test]
fn negative_zero_is_a_signed_float() {
    let Value::Number(Number::Float(f)) = parse(b"-0").unwrap() else {
        panic!("expected float");
    };
    assert!(f == 0.0 && f.is_sign_negative());
}

#[test]
fn out_of_range_numbers_degrade_to_float() {
    assert_eq!(parse(b"9223372036854775808").unwrap(), Value::from(9_223_372_036_854_775_808.0));
    assert_eq!(parse(b"-9223372036854775808").unwrap(), Value::from(i64::MIN));
    assert_eq!(parse(b"[1e400, -1e400]").unwrap(), Value::Array(vec![
        Value::from(f64::INFINITY),
        Value::from(f64::NEG_INFINITY),
    ]));
}

#[test]
fn object_keeps_first_seen_key_order() {
    let v = parse(br#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn duplicate_keys_last_value_wins() {
    let v = parse(br#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members.get_index(0), Some((&"a".to_owned(), &Value::from(3))));
    assert_eq!(v.get("b"), Some(&Value::from(2)));
}

#[test]
fn escaped_keys_are_decoded() {
    let v = parse(br#"{"a\n": 1}"#).unwrap();
    assert_eq!(v.get("a\n"), Some(&Value::from(1)));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let depth = ParserOptions::DEFAULT_MAX_DEPTH;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(text.as_bytes()).is_ok());

    let options = ParserOptions { max_depth: 0 };
    assert_eq!(parse_with_options(b"\"scalar\"", &options).unwrap(), Value::from("scalar"));
}

#[test]
fn leading_bom_is_not_whitespace() {
    assert!(parse("\u{feff}1".as_bytes()).is_err());
}

#[test]
fn repeated_parses_agree() {
    let text = br#"{"k": [1, 2.5, "x\ty", {"n": null}], "e": 1e-3}"#;
    let first = parse(text).unwrap();
    for _ in 0..100 {
        assert_eq!(parse(text).unwrap(), first);
    }
}

#[test]
fn parses_concurrently() {
    let text = br#"{"threads": [1, 2, 3], "ok": true}"#;
    let expected = parse(text).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| parse(text))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<crate::ParseError>();
    assert_send_sync::<ParserOptions>();
}
