// Additional parser error path tests
// These systematically test unhappy paths through the object and array decoders

use strict_json::{parse, ErrorKind};

fn kind_of(source: &str) -> ErrorKind {
    match parse(source) {
        Ok(value) => panic!("{source:?} should fail, got {value:?}"),
        Err(err) => err.kind,
    }
}

#[test]
fn test_parser_error_missing_closing_brace() {
    assert_eq!(kind_of(r#"{ "key": 123"#), ErrorKind::UnterminatedObject);
}

#[test]
fn test_parser_error_mismatched_closing_bracket() {
    assert_eq!(kind_of(r#"{ "arr": [1, 2, 3 }"#), ErrorKind::ExpectedCommaOrBracket);
    assert_eq!(kind_of("[1, 2}"), ErrorKind::ExpectedCommaOrBracket);
    assert_eq!(kind_of(r#"{"a": 1]"#), ErrorKind::ExpectedCommaOrBrace);
}

#[test]
fn test_parser_error_missing_colon() {
    assert_eq!(kind_of(r#"{ "key" 123 }"#), ErrorKind::ExpectedColon);
    assert_eq!(kind_of(r#"{ "key" = 123 }"#), ErrorKind::ExpectedColon);
}

#[test]
fn test_parser_error_unexpected_eof() {
    assert_eq!(kind_of(r#"{ "key": "#), ErrorKind::UnterminatedObject);
    assert_eq!(kind_of("[ "), ErrorKind::UnterminatedArray);
}

#[test]
fn test_parser_error_double_comma() {
    assert_eq!(kind_of(r#"{ "a": 1,, "b": 2 }"#), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of("[1,,2]"), ErrorKind::UnexpectedCharacter);
}

#[test]
fn test_parser_error_leading_comma() {
    assert_eq!(kind_of("[,1]"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of(r#"{,"a":1}"#), ErrorKind::UnexpectedCharacter);
}

#[test]
fn test_parser_error_trailing_comma_with_whitespace() {
    assert_eq!(kind_of("[1,\n\t]"), ErrorKind::TrailingComma);
    assert_eq!(kind_of("{\"a\": 1 ,\r\n}"), ErrorKind::TrailingComma);
}

#[test]
fn test_parser_error_missing_value() {
    assert_eq!(kind_of(r#"{"a": }"#), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of(r#"{"a": ,}"#), ErrorKind::UnexpectedCharacter);
}

#[test]
fn test_parser_error_nested_duplicate_key() {
    assert_eq!(
        kind_of(r#"{"outer": {"k": 1, "k": 2}}"#),
        ErrorKind::DuplicateKey
    );
}

#[test]
fn test_parser_error_duplicate_after_unescape() {
    assert_eq!(kind_of(r#"{"A": 1, "\u0041": 2}"#), ErrorKind::DuplicateKey);
}

#[test]
fn test_same_key_in_sibling_objects_is_fine() {
    assert!(parse(r#"[{"k": 1}, {"k": 2}]"#).is_ok());
    assert!(parse(r#"{"k": {"k": {"k": null}}}"#).is_ok());
}

#[test]
fn test_parser_error_relaxed_syntax_rejected() {
    assert_eq!(kind_of("{'a': 1}"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of("[NaN]"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of("[Infinity]"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of("[0x10]"), ErrorKind::ExpectedCommaOrBracket);
    assert_eq!(kind_of("/* c */ 1"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind_of("\u{feff}{}"), ErrorKind::UnexpectedCharacter);
}

#[test]
fn test_parser_error_extra_closing() {
    assert_eq!(kind_of("{}}"), ErrorKind::TrailingContent);
    assert_eq!(kind_of("[]]"), ErrorKind::TrailingContent);
}
