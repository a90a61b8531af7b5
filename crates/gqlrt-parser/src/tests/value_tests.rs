//! Tests for literal parsing, printing, and materialization.

use crate::ast::ScalarKind;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::ValueError;
use crate::ast::VariableValues;
use crate::parse_query;
use crate::parse_schema;
use serde_json::json;

/// Parses `{ f(x: <literal>) }` and returns the literal.
fn parse_value(literal: &str) -> Value {
    let doc = parse_query(&format!("{{ f(x: {literal}) }}"))
        .expect("literal parses");
    match &doc.operations[0].selection_set[0] {
        Selection::Field(field) => field.arguments[0].value.clone(),
        other => panic!("expected a field selection, got {other:?}"),
    }
}

#[test]
fn scalar_kinds() {
    assert!(matches!(
        parse_value("42"),
        Value::Scalar(ref s) if s.kind == ScalarKind::Int && s.text == "42",
    ));
    assert!(matches!(
        parse_value("-1.5e3"),
        Value::Scalar(ref s) if s.kind == ScalarKind::Float,
    ));
    assert!(matches!(
        parse_value("\"hi\""),
        Value::Scalar(ref s) if s.kind == ScalarKind::String && s.text == "hi",
    ));
    assert!(matches!(
        parse_value("RED"),
        Value::Scalar(ref s) if s.kind == ScalarKind::Name && s.text == "RED",
    ));
    assert!(matches!(parse_value("null"), Value::Null(_)));
    assert!(matches!(
        parse_value("$id"),
        Value::Variable(ref v) if v.name == "id",
    ));
}

#[test]
fn materialization() {
    assert_eq!(parse_value("42").resolve_const().unwrap(), json!(42));
    assert_eq!(parse_value("-7").resolve_const().unwrap(), json!(-7));
    assert_eq!(parse_value("1.5").resolve_const().unwrap(), json!(1.5));
    assert_eq!(parse_value("\"hi\"").resolve_const().unwrap(), json!("hi"));
    assert_eq!(parse_value("true").resolve_const().unwrap(), json!(true));
    assert_eq!(parse_value("false").resolve_const().unwrap(), json!(false));
    assert_eq!(parse_value("RED").resolve_const().unwrap(), json!("RED"));
    assert_eq!(parse_value("null").resolve_const().unwrap(), json!(null));
    assert_eq!(
        parse_value("[1, [2, 3]]").resolve_const().unwrap(),
        json!([1, [2, 3]]),
    );
    assert_eq!(
        parse_value("{a: 1, b: {c: \"x\"}}").resolve_const().unwrap(),
        json!({"a": 1, "b": {"c": "x"}}),
    );
}

#[test]
fn variable_resolution() {
    let mut vars = VariableValues::new();
    vars.insert("id".to_string(), json!(7));
    let value = parse_value("{user: $id}");
    assert_eq!(value.resolve(&vars).unwrap(), json!({"user": 7}));
}

#[test]
fn unbound_variable_is_an_error() {
    let vars = VariableValues::new();
    let err = parse_value("$missing").resolve(&vars).unwrap_err();
    assert!(matches!(
        err,
        ValueError::UndefinedVariable { ref name, .. } if name == "missing",
    ));
}

/// A constant-mode literal must fail if asked to resolve a variable.
#[test]
fn const_materialization_rejects_variables() {
    let err = parse_value("[$v]").resolve_const().unwrap_err();
    assert!(matches!(
        err,
        ValueError::VariableInConstValue { ref name, .. } if name == "v",
    ));
}

/// Constant parse positions reject variables outright, at parse time.
#[test]
fn const_parse_position_rejects_variables() {
    let err = parse_schema("type Q { f(a: Int = $x): Int }").unwrap_err();
    assert_eq!(
        err.message(),
        "variable `$x` is not allowed in a constant value",
    );
}

#[test]
fn canonical_printing() {
    for literal in [
        "42",
        "-1.5e3",
        "\"hi\"",
        "true",
        "null",
        "RED",
        "$id",
        "[1, \"two\", true, null]",
        "{a: 1, b: [2, 3]}",
    ] {
        assert_eq!(parse_value(literal).to_string(), literal);
    }
}

#[test]
fn printed_strings_are_escaped() {
    let value = parse_value(r#""a\"b\nc""#);
    assert_eq!(value.to_string(), r#""a\"b\nc""#);
}
