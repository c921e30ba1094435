//! Printer errors.

use esgen_ast::NodeKind;
use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while rendering a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PrintError {
    /// The tree contains a construct that has no text form.
    #[error("cannot print {kind}: construct has no text form")]
    #[diagnostic(code(esgen::printer::unsupported))]
    Unsupported { kind: NodeKind },
}

/// Convenient `Result` alias for rendering.
pub type PrintResult<T> = Result<T, PrintError>;

/// A malformed indentation style string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid indent style `{value}`")]
#[diagnostic(
    code(esgen::printer::indent_style),
    help("expected `spaces`, `tabs`, `spaces:<width>` or `tabs:<width>`")
)]
pub struct IndentStyleError {
    pub value: String,
}
