//! Tests for typed values and the type node factories

use super::{numbers, vector};
use crate::{ConfigurationError, Param, SyntaxError, TypeError, Value};
use pretty_assertions::assert_eq;

/// Test from_value wraps a payload with its type
#[test]
fn test_from_value() {
    let types = numbers();
    let value = types.integer.from_value(123_i64);

    assert_eq!(value.value(), &Value::Integer(123));
    assert!(value.ty().ptr_eq(&types.integer));
}

/// Test display goes through the type's stringify rule
#[test]
fn test_display_uses_stringify() {
    let types = numbers();
    let vector = vector();
    let vec3 = vector.specify(&[Param::from(3)]).unwrap();

    assert_eq!(types.integer.from_value(123_i64).to_string(), "123");
    assert_eq!(
        vec3.from_value(vec![1.0, 2.0, 3.0]).to_string(),
        "{1; 2; 3}"
    );
}

/// Test numeric coercion delegates to the payload
#[test]
fn test_numeric_coercion() {
    let types = numbers();
    let value = types.integer.from_value(123_i64);

    assert_eq!(value.as_f64().map(|n| n + 1.0), Some(124.0));
    assert_eq!(types.float.from_value(Value::Unit).as_f64(), None);
}

/// Test from_string parses through the type
#[test]
fn test_from_string() {
    let types = numbers();
    let value = types.integer.from_string("42", &[]).unwrap();

    assert_eq!(value.value(), &Value::Integer(42));
    assert!(value.ty().is_equal(&types.integer));
}

/// Test parse failures propagate unchanged
#[test]
fn test_from_string_propagates_syntax_error() {
    let types = numbers();
    let result = types.integer.from_string("forty-two", &[]);

    match result {
        Err(TypeError::Syntax(SyntaxError::Malformed {
            type_name, input, ..
        })) => {
            assert_eq!(type_name, "Integer");
            assert_eq!(input, "forty-two");
        }
        other => panic!("Expected a syntax error, got: {:?}", other),
    }
}

/// Test from_data builds through the create rule
#[test]
fn test_from_data() {
    let vector = vector();
    let vec2 = vector.specify(&[Param::from(2)]).unwrap();

    let value = vec2
        .from_data(&[Value::from(1.0), Value::from(2.0), Value::from(3.0)])
        .unwrap();

    assert_eq!(value.value(), &Value::from(vec![1.0, 2.0]));
}

/// Test factories report the missing operation
#[test]
fn test_missing_operations() {
    let types = numbers();
    let vector = vector();

    assert_eq!(
        types.integer.from_data(&[]).unwrap_err(),
        TypeError::Configuration(ConfigurationError::MissingOperation {
            type_name: "Integer".to_string(),
            operation: "create",
        })
    );
    assert!(matches!(
        vector.from_string("{1; 2}", &[]),
        Err(TypeError::Configuration(ConfigurationError::MissingOperation {
            operation: "parse",
            ..
        }))
    ));
}

/// Test typed values compare by type structure and payload
#[test]
fn test_typed_value_equality() {
    let vector = vector();
    let a = vector
        .specify(&[Param::from(2)])
        .unwrap()
        .from_value(vec![1.0, 0.0]);
    let b = vector
        .specify(&[Param::from(2)])
        .unwrap()
        .from_value(vec![1.0, 0.0]);

    assert_eq!(a, b);
}
