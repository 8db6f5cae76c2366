//! Unit tests for type nodes, parameters and typed values

use crate::{Param, SyntaxError, TypeNode, TypeSpec, Value};

mod test_param_implements;
mod test_typed_value;

/// The numeric hierarchy used across the tests:
/// Number <- Integer <- Byte, Number <- Float
pub(crate) struct Numbers {
    pub number: TypeNode,
    pub integer: TypeNode,
    pub float: TypeNode,
    pub byte: TypeNode,
}

pub(crate) fn integer_like(name: &str, faces: &[&TypeNode]) -> TypeNode {
    let type_name = name.to_string();
    TypeSpec::named(name)
        .with_faces(faces.iter().copied())
        .with_parse(move |source, _| {
            source
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|err| SyntaxError::malformed(&type_name, source, err.to_string()))
        })
        .with_stringify(|value, _| value.to_string())
        .build()
        .expect("integer-like type should build")
}

pub(crate) fn numbers() -> Numbers {
    let number = TypeSpec::named("Number")
        .abstract_type()
        .build()
        .expect("abstract Number should build");
    let integer = integer_like("Integer", &[&number]);
    let float = TypeSpec::named("Float")
        .with_face(&number)
        .with_parse(|source, _| {
            source
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|err| SyntaxError::malformed("Float", source, err.to_string()))
        })
        .with_stringify(|value, _| value.to_string())
        .build()
        .expect("Float should build");
    let byte = integer_like("Byte", &[&integer]);

    Numbers {
        number,
        integer,
        float,
        byte,
    }
}

/// Abstract `Vector` whose specializations take the length as their only param
pub(crate) fn vector() -> TypeNode {
    TypeSpec::named("Vector")
        .abstract_type()
        .with_specify(|base, params| {
            let len = params.first().and_then(Param::as_integer).unwrap_or(0) as usize;
            Ok(TypeSpec::specialization(base, params.to_vec())
                .with_create(move |data| Value::List(data.iter().take(len).cloned().collect()))
                .with_stringify(|value, _| match value {
                    Value::List(items) => {
                        let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                        format!("{{{}}}", items.join("; "))
                    }
                    other => other.to_string(),
                })
                .build()?)
        })
        .build()
        .expect("Vector should build")
}
