//! Error types for Polyface type nodes
//!
//! Follows the miette patterns used throughout the workspace so that setup
//! defects and malformed literals render as proper diagnostics.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Convenience alias for results carrying a [`TypeError`]
pub type TypeResult<T> = Result<T, TypeError>;

/// Umbrella error for everything a type node or a typed rule can raise
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Value(#[from] ValueError),
}

/// Setup defects detected while building or using a type node
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid type specification: a type needs a name or a template with parameters")]
    #[diagnostic(
        code(polyface::types::invalid_specification),
        help("Give the type a name, or build it with TypeSpec::specialization")
    )]
    InvalidSpecification,

    #[error("Invalid type interface for {type_name}: a concrete type needs stringify and parse or create")]
    #[diagnostic(
        code(polyface::types::invalid_interface),
        help("Mark the type abstract, or supply stringify together with parse or create")
    )]
    InvalidInterface { type_name: String },

    #[error("Type {type_name} is not generic")]
    #[diagnostic(
        code(polyface::types::not_generic),
        help("Only types built with a specify rule can be specialized")
    )]
    NotGeneric { type_name: String },

    #[error("Specialization {specialized} of {type_name} does not derive from it")]
    #[diagnostic(
        code(polyface::types::invalid_specialization),
        help("Build specializations with TypeSpec::specialization so the generic type is both template and face")
    )]
    InvalidSpecialization {
        type_name: String,
        specialized: String,
    },

    #[error("Type {type_name} does not provide {operation}")]
    #[diagnostic(code(polyface::types::missing_operation))]
    MissingOperation {
        type_name: String,
        operation: &'static str,
    },
}

/// Raised by `parse` rules on malformed input
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Invalid number literal")]
    #[diagnostic(
        code(polyface::syntax::invalid_number),
        help("Number literals look like 42, 3.14, .5 or 2.1e-3")
    )]
    InvalidNumber {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("Cannot parse {input:?} as {type_name}: {message}")]
    #[diagnostic(code(polyface::syntax::malformed))]
    Malformed {
        type_name: String,
        input: String,
        message: String,
    },
}

impl SyntaxError {
    /// Create an invalid number error covering the whole literal
    pub fn invalid_number(src: &str, reason: &str) -> Self {
        Self::InvalidNumber {
            src: src.to_string(),
            span: (0, src.len()).into(),
            reason: reason.to_string(),
        }
    }

    /// Create a generic parse failure for a user-defined type
    pub fn malformed(type_name: &str, input: &str, message: impl Into<String>) -> Self {
        Self::Malformed {
            type_name: type_name.to_string(),
            input: input.to_string(),
            message: message.into(),
        }
    }
}

/// Raised by value rules applied to payloads of the wrong shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Invalid operand: {operation} cannot be applied to [{operand_types}]")]
    #[diagnostic(
        code(polyface::value::invalid_operand),
        help("Check that the overload was registered for matching payloads")
    )]
    InvalidOperand {
        operation: String,
        operand_types: String,
    },
}

impl ValueError {
    /// Create an invalid operand error from the offending payload type names
    pub fn invalid_operand(operation: &str, operand_types: Vec<String>) -> Self {
        Self::InvalidOperand {
            operation: operation.to_string(),
            operand_types: operand_types.join(", "),
        }
    }
}
