//! Errors raised while building a tree.

use crate::node_kind::NodeKind;
use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by node constructors and group conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConstructionError {
    /// A numeric literal was requested for a type with no numeric form.
    #[error("unsupported number type `{type_name}`")]
    #[diagnostic(
        code(esgen::ast::unsupported_number),
        help("use an integer, f32, f64 or BigDecimal value")
    )]
    UnsupportedNumber { type_name: &'static str },

    /// A node was narrowed into a group its kind is not a member of.
    #[error("{kind} cannot be used as {group}")]
    #[diagnostic(code(esgen::ast::not_in_group))]
    NotInGroup { kind: NodeKind, group: &'static str },
}

/// Convenient `Result` alias for fallible construction.
pub type ConstructionResult<T> = Result<T, ConstructionError>;
