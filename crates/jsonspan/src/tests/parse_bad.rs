use rstest::rstest;

use crate::{ErrorKind, ParserOptions, parse, parse_with_options, validate, validate_with_options};

#[rstest]
#[case("", ErrorKind::UnexpectedEndOfInput, 0)]
#[case("   ", ErrorKind::UnexpectedEndOfInput, 3)]
#[case("[", ErrorKind::UnexpectedEndOfInput, 1)]
#[case("[1", ErrorKind::UnexpectedEndOfInput, 2)]
#[case("[1,2,", ErrorKind::UnexpectedEndOfInput, 5)]
#[case(r#"{"a""#, ErrorKind::UnexpectedEndOfInput, 4)]
#[case(r#"{"a":1"#, ErrorKind::UnexpectedEndOfInput, 6)]
#[case(r#"{"a":"#, ErrorKind::UnexpectedEndOfInput, 5)]
#[case(r#""open"#, ErrorKind::UnexpectedEndOfInput, 5)]
#[case("[1,]", ErrorKind::ExpectedValue, 3)]
#[case("[,1]", ErrorKind::ExpectedValue, 1)]
#[case(r#"{"a":}"#, ErrorKind::ExpectedValue, 5)]
#[case("]", ErrorKind::ExpectedValue, 0)]
#[case(":", ErrorKind::ExpectedValue, 0)]
#[case("[1 2]", ErrorKind::ExpectedCommaOrEnd, 3)]
#[case("[1}", ErrorKind::ExpectedCommaOrEnd, 2)]
#[case(r#"{"a":1]"#, ErrorKind::ExpectedCommaOrEnd, 6)]
#[case(r#"{"a":1 "b":2}"#, ErrorKind::ExpectedCommaOrEnd, 7)]
#[case(r#"{"a" 1}"#, ErrorKind::ExpectedColon, 5)]
#[case(r#"{"a",1}"#, ErrorKind::ExpectedColon, 4)]
#[case("{1:2}", ErrorKind::ExpectedObjectKey, 1)]
#[case(r#"{"a":1,}"#, ErrorKind::ExpectedObjectKey, 7)]
#[case("{a:1}", ErrorKind::UnexpectedCharacter, 1)]
#[case("1 2", ErrorKind::TrailingData, 2)]
#[case("[]]", ErrorKind::TrailingData, 2)]
#[case("{} x", ErrorKind::TrailingData, 3)]
#[case("01", ErrorKind::InvalidNumber, 1)]
#[case("[-]", ErrorKind::InvalidNumber, 2)]
#[case("1.e5", ErrorKind::InvalidNumber, 2)]
#[case("+1", ErrorKind::UnexpectedCharacter, 0)]
#[case("nan", ErrorKind::UnexpectedCharacter, 1)]
#[case("[Infinity]", ErrorKind::UnexpectedCharacter, 1)]
#[case("'x'", ErrorKind::UnexpectedCharacter, 0)]
#[case(r#""\x""#, ErrorKind::InvalidEscape, 2)]
#[case(r#""\u12""#, ErrorKind::InvalidEscape, 5)]
#[case(r#""\uD83D""#, ErrorKind::LoneSurrogate, 1)]
#[case(r#"["ok", "\uDE00"]"#, ErrorKind::LoneSurrogate, 8)]
#[case("\"a\u{1}\"", ErrorKind::InvalidControlCharacter, 2)]
#[case("\"line\nbreak\"", ErrorKind::InvalidControlCharacter, 5)]
fn rejects(#[case] text: &str, #[case] kind: ErrorKind, #[case] offset: usize) {
    let err = parse(text.as_bytes()).unwrap_err();
    assert_eq!((err.kind(), err.offset()), (kind, offset), "input: {text:?}");
    assert_eq!(validate(text.as_bytes()).unwrap_err(), err);
}

#[rstest]
#[case(b"[\"\xff\"]", 2)]
#[case(b"\"\xc3\"", 1)]
#[case(b"\xed\xa0\x80", 0)]
#[case(b"[1, 2] \x80", 7)]
fn rejects_malformed_utf8(#[case] bytes: &[u8], #[case] offset: usize) {
    let err = parse(bytes).unwrap_err();
    assert_eq!((err.kind(), err.offset()), (ErrorKind::InvalidEncoding, offset));
    assert_eq!(validate(bytes).unwrap_err(), err);
}

#[test]
fn deep_nesting_fails_cleanly() {
    let text = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    let err = parse(text.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NestingTooDeep);
    assert_eq!(err.offset(), ParserOptions::DEFAULT_MAX_DEPTH);

    let text = r#"{"a":"#.repeat(10_000);
    assert_eq!(parse(text.as_bytes()).unwrap_err().kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn custom_depth_limit() {
    let options = ParserOptions { max_depth: 3 };
    assert!(parse_with_options(b"[{\"a\":[]}]", &options).is_ok());

    let err = parse_with_options(b"[{\"a\":[[]]}]", &options).unwrap_err();
    assert_eq!((err.kind(), err.offset()), (ErrorKind::NestingTooDeep, 7));
    assert_eq!(validate_with_options(b"[{\"a\":[[]]}]", &options).unwrap_err(), err);

    let options = ParserOptions { max_depth: 0 };
    assert_eq!(parse_with_options(b"[]", &options).unwrap_err().kind(), ErrorKind::NestingTooDeep);
}

#[test]
fn error_position_spans_lines() {
    let err = parse(b"{\n  \"a\": tru\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
    assert_eq!(err.offset(), 12);
    assert_eq!((err.line, err.column), (2, 11));
}

#[test]
fn first_error_wins() {
    // Both the bad escape and the trailing comma are errors; the escape comes first.
    let err = parse(br#"["\q", ]"#).unwrap_err();
    assert_eq!((err.kind(), err.offset()), (ErrorKind::InvalidEscape, 3));
}
