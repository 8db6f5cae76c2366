//! Polyface dispatch
//!
//! Multiple dispatch over [`polyface_types`] type nodes.
//!
//! - **Typed functions**: a type rule and a value rule producing a typed value
//! - **Overload tables**: implementations grouped by arity, resolved by
//!   first-registered match against the arguments' types
//! - **Named registries**: operator names mapped to overload tables, plus
//!   factories binding grouping tokens to tables
//!
//! Resolution is deliberately first-match rather than most-specific-match:
//! the order of `add` calls is part of the contract.

pub mod error;
pub mod function;
pub mod registry;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export public API
pub use error::{DispatchError, DispatchResult, LookupError};
pub use function::{TypeRule, TypeRuleFn, TypedFunction, ValueRuleFn};
pub use registry::{Binding, GroupingToken, NamedRegistry, TableFactory};
pub use table::{Overload, OverloadTable, Signature};
