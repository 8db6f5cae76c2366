//! Typed functions: one implementation of an overloaded operation
//!
//! A typed function pairs a rule computing the result type with a rule
//! computing the result payload. Both read the same argument slice; the type
//! rule runs first.

use polyface_types::{TypeNode, TypeResult, TypedValue, Value};
use std::fmt;
use std::sync::Arc;

/// Computes a result type from the call arguments
pub type TypeRuleFn = Arc<dyn Fn(&[TypedValue]) -> TypeResult<TypeNode> + Send + Sync>;

/// Computes a result payload from the call arguments
pub type ValueRuleFn = Arc<dyn Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync>;

/// How a typed function decides its result type
#[derive(Clone)]
pub enum TypeRule {
    /// Always the same type, whatever the arguments
    Constant(TypeNode),
    /// Derived from the arguments
    Computed(TypeRuleFn),
}

impl TypeRule {
    pub fn computed<F>(rule: F) -> Self
    where
        F: Fn(&[TypedValue]) -> TypeResult<TypeNode> + Send + Sync + 'static,
    {
        TypeRule::Computed(Arc::new(rule))
    }

    /// Evaluate the rule against a call's arguments
    pub fn resolve(&self, args: &[TypedValue]) -> TypeResult<TypeNode> {
        match self {
            TypeRule::Constant(ty) => Ok(ty.clone()),
            TypeRule::Computed(rule) => rule(args),
        }
    }
}

impl From<TypeNode> for TypeRule {
    fn from(ty: TypeNode) -> Self {
        TypeRule::Constant(ty)
    }
}

impl From<&TypeNode> for TypeRule {
    fn from(ty: &TypeNode) -> Self {
        TypeRule::Constant(ty.clone())
    }
}

impl fmt::Debug for TypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRule::Constant(ty) => f.debug_tuple("Constant").field(&ty.to_string()).finish(),
            TypeRule::Computed(_) => f.write_str("Computed"),
        }
    }
}

/// An immutable (type rule, value rule) pair callable with typed arguments
#[derive(Clone)]
pub struct TypedFunction {
    type_rule: TypeRule,
    value_rule: ValueRuleFn,
}

impl TypedFunction {
    pub fn new<F>(type_rule: impl Into<TypeRule>, value_rule: F) -> Self
    where
        F: Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static,
    {
        Self {
            type_rule: type_rule.into(),
            value_rule: Arc::new(value_rule),
        }
    }

    pub fn type_rule(&self) -> &TypeRule {
        &self.type_rule
    }

    /// The type a call with these arguments would produce
    pub fn result_type(&self, args: &[TypedValue]) -> TypeResult<TypeNode> {
        self.type_rule.resolve(args)
    }

    /// Compute the type, then the payload, and wrap them together
    pub fn call(&self, args: &[TypedValue]) -> TypeResult<TypedValue> {
        let ty = self.type_rule.resolve(args)?;
        let value = (self.value_rule)(args)?;
        Ok(ty.from_value(value))
    }

    /// Whether both handles share the same implementation
    pub fn ptr_eq(&self, other: &TypedFunction) -> bool {
        Arc::ptr_eq(&self.value_rule, &other.value_rule)
    }
}

impl fmt::Debug for TypedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedFunction")
            .field("type_rule", &self.type_rule)
            .finish_non_exhaustive()
    }
}
