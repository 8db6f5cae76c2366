//! Unit tests for typed functions, overload tables and registries

use polyface_types::{Param, SyntaxError, TypeNode, TypeResult, TypeSpec, TypedValue, Value};


pub(crate) struct Fixture {
    pub number: TypeNode,
    pub integer: TypeNode,
    pub float: TypeNode,
    pub byte: TypeNode,
    pub vector: TypeNode,
}

fn scalar(name: &str, faces: &[&TypeNode]) -> TypeNode {
    let type_name = name.to_string();
    TypeSpec::named(name)
        .with_faces(faces.iter().copied())
        .with_parse(move |source, _| {
            source
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|err| SyntaxError::malformed(&type_name, source, err.to_string()))
        })
        .with_stringify(|value, _| value.to_string())
        .build()
        .expect("scalar type should build")
}

pub(crate) fn fixture() -> Fixture {
    let number = TypeSpec::named("Number")
        .abstract_type()
        .build()
        .expect("Number should build");
    let integer = scalar("Integer", &[&number]);
    let float = scalar("Float", &[&number]);
    let byte = scalar("Byte", &[&integer]);
    let vector = TypeSpec::named("Vector")
        .abstract_type()
        .with_specify(|base, params| {
            let len = params.first().and_then(Param::as_integer).unwrap_or(0) as usize;
            Ok(TypeSpec::specialization(base, params.to_vec())
                .with_create(move |data| Value::List(data.iter().take(len).cloned().collect()))
                .with_stringify(|value, _| value.to_string())
                .build()?)
        })
        .build()
        .expect("Vector should build");

    Fixture {
        number,
        integer,
        float,
        byte,
        vector,
    }
}

/// Length parameter of a vector specialization
pub(crate) fn vector_len(arg: &TypedValue) -> usize {
    arg.ty()
        .params()
        .first()
        .and_then(Param::as_integer)
        .unwrap_or(0) as usize
}

/// Element-wise vector sum typed by the longest operand
pub(crate) fn vector_sum(vector: &TypeNode) -> crate::TypedFunction {
    let vector = vector.clone();
    crate::TypedFunction::new(
        crate::TypeRule::computed(move |args: &[TypedValue]| -> TypeResult<TypeNode> {
            let len = args.iter().map(vector_len).max().unwrap_or(0);
            vector.specify(&[Param::from(len)])
        }),
        |args| {
            let len = args.iter().map(vector_len).max().unwrap_or(0);
            let lhs = args[0].value().as_list().unwrap_or(&[]);
            let rhs = args[1].value().as_list().unwrap_or(&[]);
            let sum = (0..len)
                .map(|i| {
                    let a = lhs.get(i).and_then(Value::as_f64).unwrap_or(0.0);
                    let b = rhs.get(i).and_then(Value::as_f64).unwrap_or(0.0);
                    Value::Number(a + b)
                })
                .collect();
            Ok(Value::List(sum))
        },
    )
}

pub(crate) fn vec_of(vector: &TypeNode, items: &[f64]) -> TypedValue {
    vector
        .specify(&[Param::from(items.len())])
        .expect("vector specialization should build")
        .from_value(items.to_vec())
}
