//! Polyface type nodes
//!
//! Runtime type descriptors for the Polyface multiple-dispatch core.
//!
//! ## Architecture
//!
//! - **Type nodes**: shared, immutable descriptors linked to their supertypes
//!   ("faces"); generic nodes produce specializations on demand
//! - **Parameters**: specialization arguments and dispatch constraints, with
//!   structural equality and implements matching
//! - **Typed values**: payloads tagged with the node that owns them
//!
//! Equality between nodes is structural. Two specializations built from the
//! same template with equal params are the same type even though they are
//! distinct allocations.

pub mod error;
pub mod node;
pub mod param;
pub mod typed_value;
pub mod value;

#[cfg(test)]
mod tests;

// Re-export public API
pub use error::{ConfigurationError, SyntaxError, TypeError, TypeResult, ValueError};
pub use node::{CreateFn, Implementations, ParseFn, SpecifyFn, StringifyFn, TypeNode, TypeSpec};
pub use param::{param_equal, param_implements, Param};
pub use typed_value::TypedValue;
pub use value::Value;
