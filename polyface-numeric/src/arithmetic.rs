//! The standard arithmetic operator registry over `Number` and `Vector`

use crate::library::{self, for_values2, same_type};
use crate::number::NUMBER;
use crate::vector::VECTOR;
use polyface_dispatch::{NamedRegistry, TypeRule, TypedFunction};
use polyface_types::{TypeError, TypeResult, TypedValue, Value, ValueError};

/// Build a registry with the arithmetic operators.
///
/// - `+ - * / % ^` over (Number, Number), and unary `-` over Number
/// - element-wise `+` and `-` over (Vector, Vector) of equal length
/// - dot product `*` over (Vector, Vector)
/// - scaling `*` over (Vector, Number) and (Number, Vector)
pub fn standard_registry() -> NamedRegistry {
    let number = &*NUMBER;
    let vector = &*VECTOR;
    let mut registry = NamedRegistry::new();

    registry.add("+", [number, number], library::add());
    registry.add("-", [number, number], library::sub());
    registry.add("*", [number, number], library::mul());
    registry.add("/", [number, number], library::div());
    registry.add("%", [number, number], library::modulo());
    registry.add("^", [number, number], library::pow());
    registry.add("-", number, library::neg());

    registry.add("+", [vector, vector], element_wise("+", |a, b| a + b));
    registry.add("-", [vector, vector], element_wise("-", |a, b| a - b));
    registry.add_rules("*", [vector, vector], number, for_values2(dot_product));
    registry.add_rules("*", [vector, number], TypeRule::computed(same_type), |args| {
        match args {
            [vector, factor, ..] => scale(vector, factor),
            _ => Err(short_operands("*", args)),
        }
    });
    registry.add_rules(
        "*",
        [number, vector],
        TypeRule::computed(library::second_type),
        |args| match args {
            [factor, vector, ..] => scale(vector, factor),
            _ => Err(short_operands("*", args)),
        },
    );

    tracing::debug!("standard registry built with {} operators", registry.len());
    registry
}

fn element_wise(operation: &'static str, op: fn(f64, f64) -> f64) -> TypedFunction {
    TypedFunction::new(
        TypeRule::computed(same_type),
        for_values2(move |a, b| {
            let lhs = numbers(operation, a)?;
            let rhs = numbers(operation, b)?;
            same_length(operation, &lhs, &rhs)?;
            Ok(Value::List(
                lhs.iter()
                    .zip(&rhs)
                    .map(|(a, b)| Value::Number(op(*a, *b)))
                    .collect(),
            ))
        }),
    )
}

fn dot_product(a: &Value, b: &Value) -> TypeResult<Value> {
    let lhs = numbers("*", a)?;
    let rhs = numbers("*", b)?;
    same_length("*", &lhs, &rhs)?;
    Ok(Value::Number(lhs.iter().zip(&rhs).map(|(a, b)| a * b).sum()))
}

fn scale(vector: &TypedValue, factor: &TypedValue) -> TypeResult<Value> {
    let factor = factor.as_f64().ok_or_else(|| {
        ValueError::invalid_operand("*", vec![factor.value().type_name().to_string()])
    })?;
    let items = numbers("*", vector.value())?;
    Ok(Value::List(
        items.into_iter().map(|item| Value::Number(item * factor)).collect(),
    ))
}

fn same_length(operation: &str, lhs: &[f64], rhs: &[f64]) -> Result<(), ValueError> {
    if lhs.len() == rhs.len() {
        return Ok(());
    }
    Err(ValueError::invalid_operand(
        operation,
        vec![format!("List({})", lhs.len()), format!("List({})", rhs.len())],
    ))
}

fn short_operands(operation: &str, args: &[TypedValue]) -> TypeError {
    ValueError::invalid_operand(operation, args.iter().map(|arg| arg.ty().to_string()).collect())
        .into()
}

/// Numeric elements of a vector payload
fn numbers(operation: &str, value: &Value) -> Result<Vec<f64>, ValueError> {
    let invalid = || ValueError::invalid_operand(operation, vec![value.type_name().to_string()]);
    value
        .as_list()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_f64().ok_or_else(invalid))
        .collect()
}
