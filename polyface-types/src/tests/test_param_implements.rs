//! Tests for parameter sequence matching

use super::{numbers, vector};
use crate::{param_equal, param_implements, Param};

fn types(list: &[&crate::TypeNode]) -> Vec<Param> {
    list.iter().map(|ty| Param::from(*ty)).collect()
}

/// Test (Integer, Byte) against faces that accept it
#[test]
fn test_accepted_signatures() {
    let t = numbers();
    let candidate = types(&[&t.integer, &t.byte]);

    assert!(param_implements(&candidate, &types(&[&t.number, &t.byte])));
    assert!(param_implements(&candidate, &types(&[&t.integer, &t.integer])));
    assert!(param_implements(&candidate, &types(&[&t.number, &t.number])));
}

/// Test (Integer, Byte) against faces that reject it
#[test]
fn test_rejected_signatures() {
    let t = numbers();
    let candidate = types(&[&t.integer, &t.byte]);

    assert!(!param_implements(&candidate, &types(&[&t.byte, &t.number])));
    assert!(!param_implements(&candidate, &types(&[&t.number, &t.float])));
}

/// Test unequal lengths never match
#[test]
fn test_length_mismatch() {
    let t = numbers();

    assert!(!param_implements(&types(&[&t.integer]), &types(&[&t.number, &t.number])));
    assert!(!param_implements(&types(&[&t.integer, &t.integer]), &types(&[&t.number])));
    assert!(param_implements(&[], &[]));
}

/// Test a list in a face slot acts as a set of acceptable types
#[test]
fn test_type_alternatives() {
    let t = numbers();
    let slot = vec![Param::List(types(&[&t.float, &t.integer]))];

    assert!(param_implements(&types(&[&t.byte]), &slot));
    assert!(param_implements(&types(&[&t.float]), &slot));
    assert!(!param_implements(&types(&[&t.number]), &slot));
}

/// Test scalars match by value or by membership
#[test]
fn test_scalar_slots() {
    assert!(param_implements(&[Param::from(3)], &[Param::from(3)]));
    assert!(!param_implements(&[Param::from(3)], &[Param::from(4)]));
    assert!(param_implements(
        &[Param::from(3)],
        &[Param::List(vec![Param::from(2), Param::from(3)])]
    ));
    assert!(param_implements(
        &[Param::from("xy")],
        &[Param::List(vec!["xy".into(), "xz".into()])]
    ));
    assert!(!param_implements(&[Param::from("3")], &[Param::from(3)]));
}

/// Test mismatched shapes fail immediately
#[test]
fn test_shape_mismatch() {
    let t = numbers();

    assert!(!param_implements(&types(&[&t.integer]), &[Param::from(1)]));
    assert!(!param_implements(&[Param::from(1)], &types(&[&t.integer])));
    assert!(!param_implements(
        &[Param::List(vec![Param::from(1)])],
        &[Param::from(1)]
    ));
}

/// Test nested candidate lists recurse
#[test]
fn test_nested_lists_recurse() {
    let t = numbers();
    let candidate = vec![Param::List(types(&[&t.byte, &t.float]))];

    assert!(param_implements(
        &candidate,
        &[Param::List(types(&[&t.integer, &t.number]))]
    ));
    assert!(!param_implements(
        &candidate,
        &[Param::List(types(&[&t.float, &t.number]))]
    ));
}

/// Test specialization params take part in matching
#[test]
fn test_specialized_types_in_slots() {
    let vector = vector();
    let vec3 = vector.specify(&[Param::from(3)]).unwrap();
    let other_vec3 = vector.specify(&[Param::from(3)]).unwrap();
    let vec2 = vector.specify(&[Param::from(2)]).unwrap();

    assert!(param_implements(&[Param::from(&vec3)], &[Param::from(&vector)]));
    assert!(param_implements(&[Param::from(&vec3)], &[Param::from(&other_vec3)]));
    assert!(!param_implements(&[Param::from(&vec3)], &[Param::from(&vec2)]));
}

/// Test param_equal compares structurally and by length
#[test]
fn test_param_equal() {
    let t = numbers();

    assert!(param_equal(
        &[Param::from(&t.integer), Param::from(2)],
        &[Param::from(&t.integer), Param::from(2)]
    ));
    assert!(!param_equal(&[Param::from(2)], &[Param::from(2), Param::from(2)]));
    assert!(!param_equal(&[Param::from(&t.integer)], &[Param::from(&t.byte)]));
}
