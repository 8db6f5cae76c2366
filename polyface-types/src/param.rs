//! Specialization parameters and the structural rules comparing them.
//!
//! Parameters appear in two roles. As the `params` of a specialized node they
//! are compared with [`param_equal`]. As dispatch signatures they act as
//! constraints checked with [`param_implements`], where a list in a face slot
//! stands for a set of acceptable alternatives.

use crate::node::TypeNode;
use std::fmt;

/// A single specialization argument or signature slot
#[derive(Debug, Clone)]
pub enum Param {
    Type(TypeNode),
    Integer(i64),
    String(String),
    Boolean(bool),
    List(Vec<Param>),
}

impl Param {
    pub fn as_type(&self) -> Option<&TypeNode> {
        match self {
            Param::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Param::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Param::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Param::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Param]> {
        match self {
            Param::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this candidate parameter satisfies a single face slot
    fn satisfies(&self, face: &Param) -> bool {
        match (self, face) {
            (Param::Type(ty), Param::Type(iface)) => ty.is_implements(iface),
            (Param::Type(ty), Param::List(options)) => options
                .iter()
                .any(|option| matches!(option, Param::Type(iface) if ty.is_implements(iface))),
            (Param::Type(_), _) => false,
            (Param::List(items), Param::List(faces)) => param_implements(items, faces),
            (Param::List(_), _) => false,
            (scalar, Param::List(options)) => options.iter().any(|option| scalar_eq(scalar, option)),
            (scalar, other) => scalar_eq(scalar, other),
        }
    }
}

fn scalar_eq(a: &Param, b: &Param) -> bool {
    match (a, b) {
        (Param::Integer(a), Param::Integer(b)) => a == b,
        (Param::String(a), Param::String(b)) => a == b,
        (Param::Boolean(a), Param::Boolean(b)) => a == b,
        _ => false,
    }
}

/// Structural equality of two parameter sequences.
///
/// Type nodes compare with [`TypeNode::is_equal`], nested lists recurse and
/// scalars compare by value.
pub fn param_equal(a: &[Param], b: &[Param]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(left, right)| match (left, right) {
            (Param::Type(left), Param::Type(right)) => left.is_equal(right),
            (Param::List(left), Param::List(right)) => param_equal(left, right),
            (left, right) => scalar_eq(left, right),
        })
}

/// Check that `candidate` supports the interface described by `face`.
///
/// Both sequences must have the same length; each candidate slot is checked
/// against the face slot at the same position:
/// - a type node must implement the face type, or any type listed in the slot
/// - a scalar must equal the face scalar, or be one of the listed scalars
/// - a nested list recurses against a list slot
pub fn param_implements(candidate: &[Param], face: &[Param]) -> bool {
    candidate.len() == face.len()
        && candidate
            .iter()
            .zip(face)
            .all(|(param, slot)| param.satisfies(slot))
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        param_equal(std::slice::from_ref(self), std::slice::from_ref(other))
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Type(ty) => write!(f, "{ty}"),
            Param::Integer(n) => write!(f, "{n}"),
            Param::String(s) => f.write_str(s),
            Param::Boolean(b) => write!(f, "{b}"),
            Param::List(items) => {
                let items: Vec<String> = items.iter().map(|p| p.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<TypeNode> for Param {
    fn from(ty: TypeNode) -> Self {
        Param::Type(ty)
    }
}

impl From<&TypeNode> for Param {
    fn from(ty: &TypeNode) -> Self {
        Param::Type(ty.clone())
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Integer(n)
    }
}

impl From<i32> for Param {
    fn from(n: i32) -> Self {
        Param::Integer(n.into())
    }
}

impl From<usize> for Param {
    fn from(n: usize) -> Self {
        Param::Integer(n as i64)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::String(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::String(s)
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Boolean(b)
    }
}

impl From<Vec<Param>> for Param {
    fn from(items: Vec<Param>) -> Self {
        Param::List(items)
    }
}
