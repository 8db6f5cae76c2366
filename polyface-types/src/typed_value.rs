//! Values tagged with the type node that owns them

use crate::node::TypeNode;
use crate::param::Param;
use crate::value::Value;
use std::fmt;

/// Immutable (type, payload) pair.
///
/// Only the factory operations on [`TypeNode`] create these.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    ty: TypeNode,
    value: Value,
}

impl TypedValue {
    pub(crate) fn new(ty: TypeNode, value: Value) -> Self {
        Self { ty, value }
    }

    pub fn ty(&self) -> &TypeNode {
        &self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Serialize through the owning type, passing type-specific options
    pub fn to_string_with(&self, params: &[Param]) -> String {
        self.ty.stringify(&self.value, params)
    }

    /// Numeric coercion delegated to the payload
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&[]))
    }
}
