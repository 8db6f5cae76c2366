//! The generic `Vector` type
//!
//! `Vector` itself is abstract. `Vector<N>` specializations are built on
//! demand and carry their length as the single parameter.

use crate::number::stringify_number;
use lazy_static::lazy_static;
use polyface_types::{ConfigurationError, Param, TypeNode, TypeResult, TypeSpec, Value};

lazy_static! {
    /// Abstract vector type; specialize with a length
    pub static ref VECTOR: TypeNode = TypeSpec::named("Vector")
        .abstract_type()
        .with_specify(specify_vector)
        .build()
        .expect("Vector type configuration is complete");
}

fn specify_vector(base: &TypeNode, params: &[Param]) -> TypeResult<TypeNode> {
    let len = match params {
        [Param::Integer(len)] if *len >= 0 => *len as usize,
        _ => return Err(ConfigurationError::InvalidSpecification.into()),
    };

    Ok(TypeSpec::specialization(base, params.to_vec())
        .with_create(move |data| Value::List(data.iter().take(len).cloned().collect()))
        .with_stringify(|value, _| stringify_vector(value))
        .build()?)
}

fn stringify_vector(value: &Value) -> String {
    let Some(items) = value.as_list() else {
        return value.to_string();
    };
    let items: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::Number(number) => stringify_number(*number, false),
            other => other.to_string(),
        })
        .collect();
    format!("{{{}}}", items.join("; "))
}

/// The `Vector<len>` specialization
pub fn vector_of(len: usize) -> TypeResult<TypeNode> {
    VECTOR.specify(&[Param::from(len)])
}

/// Length carried by a vector specialization, if `ty` is one
pub fn vector_len(ty: &TypeNode) -> Option<usize> {
    if !ty.is_implements(&VECTOR) {
        return None;
    }
    ty.all_implements()
        .find_map(|node| match node.params() {
            [Param::Integer(len)] if node.template().is_some() => Some(*len as usize),
            _ => None,
        })
}
