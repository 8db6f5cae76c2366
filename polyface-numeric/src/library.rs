//! Helpers for wrapping plain functions as typed functions, and the
//! arithmetic operators built with them.
//!
//! Every prebuilt operator is typed by its first argument: `add` of two
//! `Number`s is a `Number`, `neg` of a `Vector<3>` would be a `Vector<3>`.

use lazy_static::lazy_static;
use polyface_dispatch::{TypeRule, TypedFunction};
use polyface_types::{TypeNode, TypeResult, TypedValue, Value, ValueError};

/// Lift a function over payloads into a value rule of any arity
pub fn for_values<F>(func: F) -> impl Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static
where
    F: Fn(&[Value]) -> TypeResult<Value> + Send + Sync + 'static,
{
    move |args| {
        let values: Vec<Value> = args.iter().map(|arg| arg.value().clone()).collect();
        func(&values)
    }
}

/// Lift a unary payload function into a value rule
pub fn for_value<F>(func: F) -> impl Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static
where
    F: Fn(&Value) -> TypeResult<Value> + Send + Sync + 'static,
{
    move |args| match args {
        [arg, ..] => func(arg.value()),
        [] => Err(ValueError::invalid_operand("unary operator", Vec::new()).into()),
    }
}

/// Lift a binary payload function into a value rule
pub fn for_values2<F>(func: F) -> impl Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static
where
    F: Fn(&Value, &Value) -> TypeResult<Value> + Send + Sync + 'static,
{
    move |args| match args {
        [a, b, ..] => func(a.value(), b.value()),
        _ => Err(ValueError::invalid_operand("binary operator", operand_types(args)).into()),
    }
}

/// Type rule: the type of the first argument
pub fn same_type(args: &[TypedValue]) -> TypeResult<TypeNode> {
    args.first()
        .map(|arg| arg.ty().clone())
        .ok_or_else(|| ValueError::invalid_operand("same_type", Vec::new()).into())
}

/// Type rule: the type of the second argument
pub fn second_type(args: &[TypedValue]) -> TypeResult<TypeNode> {
    args.get(1)
        .map(|arg| arg.ty().clone())
        .ok_or_else(|| ValueError::invalid_operand("second_type", operand_types(args)).into())
}

/// Wrap a unary numeric function into a type-preserving typed function
pub fn math1<F>(func: F) -> TypedFunction
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    TypedFunction::new(
        TypeRule::computed(same_type),
        for_value(move |value| match value.as_f64() {
            Some(number) => Ok(Value::Number(func(number))),
            None => Err(ValueError::invalid_operand("math1", vec![value.type_name().to_string()]).into()),
        }),
    )
}

fn binary(operation: &'static str, op: fn(f64, f64) -> f64) -> TypedFunction {
    TypedFunction::new(
        TypeRule::computed(same_type),
        for_values2(move |a, b| match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => Ok(Value::Number(op(a, b))),
            _ => Err(ValueError::invalid_operand(
                operation,
                vec![a.type_name().to_string(), b.type_name().to_string()],
            )
            .into()),
        }),
    )
}

fn operand_types(args: &[TypedValue]) -> Vec<String> {
    args.iter().map(|arg| arg.ty().to_string()).collect()
}

lazy_static! {
    /// Remainder with the sign of the dividend
    pub static ref MODULO: TypedFunction = binary("%", |a, b| a % b);
    pub static ref ADD: TypedFunction = binary("+", |a, b| a + b);
    pub static ref SUB: TypedFunction = binary("-", |a, b| a - b);
    pub static ref NEG: TypedFunction = TypedFunction::new(
        TypeRule::computed(same_type),
        for_value(|value| match value.as_f64() {
            Some(number) => Ok(Value::Number(-number)),
            None => Err(ValueError::invalid_operand("-", vec![value.type_name().to_string()]).into()),
        }),
    );
    pub static ref MUL: TypedFunction = binary("*", |a, b| a * b);
    pub static ref DIV: TypedFunction = binary("/", |a, b| a / b);
    pub static ref POW: TypedFunction = binary("^", f64::powf);
}

/// Prebuilt `%`
pub fn modulo() -> TypedFunction {
    MODULO.clone()
}

pub fn add() -> TypedFunction {
    ADD.clone()
}

pub fn sub() -> TypedFunction {
    SUB.clone()
}

pub fn neg() -> TypedFunction {
    NEG.clone()
}

pub fn mul() -> TypedFunction {
    MUL.clone()
}

pub fn div() -> TypedFunction {
    DIV.clone()
}

pub fn pow() -> TypedFunction {
    POW.clone()
}
