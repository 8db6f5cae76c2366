//! Polyface numeric types
//!
//! Ready-made types and operators on top of the dispatch core:
//!
//! - [`NUMBER`]: concrete `f64` numbers with literal parsing and printing
//! - [`VECTOR`]: abstract vectors specialized by length (`Vector<3>`)
//! - [`library`]: helpers lifting plain functions into typed functions, and
//!   the arithmetic operators built from them
//! - [`standard_registry`]: the arithmetic operators bound to their symbols

pub mod arithmetic;
pub mod library;
pub mod number;
pub mod vector;

#[cfg(test)]
mod tests;

pub use arithmetic::standard_registry;
pub use number::{parse_number, stringify_number, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, NUMBER};
pub use vector::{vector_len, vector_of, VECTOR};
