//! Dispatch error types
//!
//! Lookup failures and dispatch mismatches are kept apart so that callers can
//! report "unsupported operator" differently from a bad argument list.

use miette::Diagnostic;
use polyface_types::TypeError;
use thiserror::Error;

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Raised by strict registry lookups
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("Unknown operator: {name}")]
    #[diagnostic(
        code(polyface::dispatch::unknown_operator),
        help("Register at least one overload for {name} before calling it")
    )]
    UnknownOperator { name: String },
}

impl LookupError {
    pub fn unknown_operator(name: &str) -> Self {
        Self::UnknownOperator {
            name: name.to_string(),
        }
    }
}

/// Errors raised while resolving and invoking an overload
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("No implementation matches argument list ({argument_types})")]
    #[diagnostic(
        code(polyface::dispatch::no_matching_implementation),
        help("Registered signatures are tried in insertion order; none accepts these argument types")
    )]
    NoMatchingImplementation { argument_types: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Type(#[from] TypeError),
}

impl DispatchError {
    /// Create a mismatch error listing the offending argument types
    pub fn no_matching_implementation(argument_types: Vec<String>) -> Self {
        Self::NoMatchingImplementation {
            argument_types: argument_types.join(", "),
        }
    }
}
