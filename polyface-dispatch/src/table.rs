//! Overload tables
//!
//! An overload table holds every implementation of one operation, grouped by
//! parameter count. Within a group signatures are probed in the order they
//! were added and the first one the argument types implement wins. A broad
//! signature added before a narrower one therefore shadows it for good.

use crate::error::{DispatchError, DispatchResult};
use crate::function::{TypeRule, TypedFunction};
use indexmap::IndexMap;
use polyface_types::{param_implements, Param, TypeNode, TypeResult, TypedValue, Value};
use std::fmt;

/// Ordered parameter constraints an argument list is matched against.
///
/// A slot holding a list of types accepts any of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature(Vec<Param>);

impl Signature {
    pub fn new(slots: Vec<Param>) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[Param] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether argument types satisfy every slot
    pub fn accepts(&self, arg_types: &[Param]) -> bool {
        param_implements(arg_types, &self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.0.iter().map(|slot| slot.to_string()).collect();
        write!(f, "({})", slots.join(", "))
    }
}

impl From<TypeNode> for Signature {
    fn from(ty: TypeNode) -> Self {
        Self(vec![Param::Type(ty)])
    }
}

impl From<&TypeNode> for Signature {
    fn from(ty: &TypeNode) -> Self {
        Self(vec![Param::from(ty)])
    }
}

impl From<Vec<TypeNode>> for Signature {
    fn from(types: Vec<TypeNode>) -> Self {
        Self(types.into_iter().map(Param::Type).collect())
    }
}

impl From<&[TypeNode]> for Signature {
    fn from(types: &[TypeNode]) -> Self {
        Self(types.iter().map(Param::from).collect())
    }
}

impl<const N: usize> From<[TypeNode; N]> for Signature {
    fn from(types: [TypeNode; N]) -> Self {
        Self(types.into_iter().map(Param::Type).collect())
    }
}

impl<const N: usize> From<[&TypeNode; N]> for Signature {
    fn from(types: [&TypeNode; N]) -> Self {
        Self(types.into_iter().map(Param::from).collect())
    }
}

impl From<Vec<Param>> for Signature {
    fn from(slots: Vec<Param>) -> Self {
        Self(slots)
    }
}

/// A registered (signature, implementation) pair
#[derive(Debug, Clone)]
pub struct Overload {
    pub signature: Signature,
    pub function: TypedFunction,
}

/// Implementations of one operation, grouped by arity
#[derive(Debug, Clone, Default)]
pub struct OverloadTable {
    groups: IndexMap<usize, Vec<Overload>>,
}

impl OverloadTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an implementation to the group for the signature's arity
    pub fn add(&mut self, signature: impl Into<Signature>, function: TypedFunction) {
        let signature = signature.into();
        tracing::debug!("registering overload {} ({} params)", signature, signature.len());
        self.groups
            .entry(signature.len())
            .or_default()
            .push(Overload {
                signature,
                function,
            });
    }

    /// Wrap a (type rule, value rule) pair and append it
    pub fn add_rules<F>(
        &mut self,
        signature: impl Into<Signature>,
        type_rule: impl Into<TypeRule>,
        value_rule: F,
    ) where
        F: Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static,
    {
        self.add(signature, TypedFunction::new(type_rule, value_rule));
    }

    /// First implementation whose signature the argument types implement
    pub fn get(&self, arg_types: &[TypeNode]) -> Option<&TypedFunction> {
        let arg_types: Vec<Param> = arg_types.iter().map(Param::from).collect();
        self.resolve(&arg_types)
    }

    /// Like [`OverloadTable::get`], for argument descriptions already expressed as params
    pub fn resolve(&self, arg_types: &[Param]) -> Option<&TypedFunction> {
        self.groups
            .get(&arg_types.len())?
            .iter()
            .find(|overload| overload.signature.accepts(arg_types))
            .map(|overload| &overload.function)
    }

    /// Resolve by the arguments' own types and invoke the winner
    pub fn call(&self, args: &[TypedValue]) -> DispatchResult<TypedValue> {
        let arg_types: Vec<TypeNode> = args.iter().map(|arg| arg.ty().clone()).collect();
        let Some(function) = self.get(&arg_types) else {
            tracing::trace!("no overload accepts {} arguments", args.len());
            return Err(DispatchError::no_matching_implementation(
                arg_types.iter().map(|ty| ty.to_string()).collect(),
            ));
        };
        tracing::trace!("resolved {} arguments to {:?}", args.len(), function);
        Ok(function.call(args)?)
    }

    /// Overloads registered for one arity, in probe order
    pub fn overloads(&self, arity: usize) -> &[Overload] {
        self.groups.get(&arity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registered arities, in the order they first appeared
    pub fn arities(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    /// Total number of registered overloads
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
